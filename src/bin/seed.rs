use axum_storefront_api::{config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    seed_product_types(&pool).await?;
    seed_products(&pool).await?;
    seed_customers(&pool).await?;
    seed_orders(&pool).await?;
    seed_order_lines(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_product_types(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let types = vec![(1, "Grinders"), (2, "Espresso Machines"), (3, "Accessories")];

    for (id, name) in types {
        sqlx::query(
            r#"
            INSERT INTO product_types (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    }

    println!("Seeded product types");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products = vec![
        (
            1,
            "GRD-001",
            "Conical Burr Grinder",
            "Stepped conical burr grinder with 40 grind settings",
            1,
            34,
            12500_i64,
            19900_i64,
        ),
        (
            2,
            "GRD-002",
            "Ceramic Hand Mill",
            "Portable ceramic hand mill for travel brewing",
            1,
            120,
            2100,
            4900,
        ),
        (
            3,
            "ESP-001",
            "Lever Espresso Machine",
            "Single-group manual lever machine, brass boiler",
            2,
            12,
            45000,
            69900,
        ),
        (
            4,
            "ESP-002",
            "Compact Espresso Machine",
            "58mm portafilter, three-way solenoid valve",
            2,
            25,
            28000,
            44900,
        ),
        (
            5,
            "ACC-001",
            "Calibrated Tamper",
            "Spring-calibrated 58mm tamper, flat base",
            3,
            200,
            900,
            2400,
        ),
        (
            6,
            "ACC-002",
            "Milk Pitcher",
            "Stainless 600ml pitcher with rounded spout",
            3,
            75,
            1200,
            2900,
        ),
    ];

    for (id, sku, name, description, type_id, stock, cost, selling_price) in products {
        sqlx::query(
            r#"
            INSERT INTO products (id, sku, name, description, type_id, stock, cost, selling_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(sku)
        .bind(name)
        .bind(description)
        .bind(type_id)
        .bind(stock)
        .bind(cost)
        .bind(selling_price)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_customers(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let customers = vec![
        (
            1,
            "Astrid Jensen",
            "Nordkaffe ApS",
            "astrid@nordkaffe.dk",
            "Vestergade 12",
            "8000",
            "Aarhus",
            "Denmark",
        ),
        (
            2,
            "Marco Oliveira",
            "Cafe do Porto Lda",
            "marco@cafedoporto.pt",
            "Rua das Flores 45",
            "4050-262",
            "Porto",
            "Portugal",
        ),
        (
            3,
            "Yuki Tanaka",
            "Kissaten Supply KK",
            "yuki@kissaten-supply.jp",
            "2-14-3 Jinbocho",
            "101-0051",
            "Tokyo",
            "Japan",
        ),
        (
            4,
            "Claire Dubois",
            "Torrefaction Dubois",
            "claire@torrefaction-dubois.fr",
            "18 Rue des Martyrs",
            "75009",
            "Paris",
            "France",
        ),
        (
            5,
            "Tomas Novak",
            "Prazirna Novak sro",
            "tomas@prazirna-novak.cz",
            "Korunni 89",
            "130 00",
            "Prague",
            "Czechia",
        ),
        (
            6,
            "Grace Mwangi",
            "Highlands Coffee Ltd",
            "grace@highlandscoffee.ke",
            "Kimathi Street 7",
            "00100",
            "Nairobi",
            "Kenya",
        ),
    ];

    for (id, full_name, company_name, email, address, postal_code, city, country) in customers {
        sqlx::query(
            r#"
            INSERT INTO customers (id, full_name, company_name, email, address, postal_code, city, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(company_name)
        .bind(email)
        .bind(address)
        .bind(postal_code)
        .bind(city)
        .bind(country)
        .execute(pool)
        .await?;
    }

    println!("Seeded customers");
    Ok(())
}

async fn seed_orders(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let orders = vec![(1, 1), (2, 1), (3, 2), (4, 3), (5, 4), (6, 5)];

    for (id, customer_id) in orders {
        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(customer_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded orders");
    Ok(())
}

async fn seed_order_lines(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let lines = vec![
        (5, 1, 4),
        (5, 3, 3),
        (5, 5, 5),
        (4, 2, 3),
        (4, 4, 4),
        (2, 1, 2),
        (2, 6, 3),
        (1, 4, 3),
        (3, 2, 1),
    ];

    for (product_id, order_id, amount) in lines {
        sqlx::query(
            r#"
            INSERT INTO order_lines (product_id, order_id, amount)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id, order_id) DO NOTHING
            "#,
        )
        .bind(product_id)
        .bind(order_id)
        .bind(amount)
        .execute(pool)
        .await?;
    }

    println!("Seeded order lines");
    Ok(())
}
