//! Starter data for a fresh database
//!
//! Seeding wipes every table and loads one verified admin account plus the
//! starter menu of pizzas, drinks and desserts.

use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tracing::info;

use pd_core::domain::entities::user::Role;

use crate::InfrastructureError;

/// A product in the starter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub name: &'static str,
    /// Price in cents
    pub price_cents: i64,
    pub description: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

impl SeedProduct {
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }
}

const fn product(
    name: &'static str,
    price_cents: i64,
    description: &'static str,
    category: &'static str,
    image_url: &'static str,
) -> SeedProduct {
    SeedProduct {
        name,
        price_cents,
        description,
        category,
        image_url,
    }
}

pub static STARTER_CATALOG: &[SeedProduct] = &[
    // Pizzas
    product("Margherita", 1000, "Classic tomato and mozzarella", "pizza", "https://kristineskitchenblog.com/wp-content/uploads/2024/07/margherita-pizza-22-2.jpg"),
    product("Pepperoni", 1200, "Spicy pepperoni slices", "pizza", "https://arecipeforfun.com/wp-content/uploads/2025/03/Edits-Turkey-Pepperoni-Pizza-Recipe-14-500x500.jpg"),
    product("Hawaiian", 1150, "Ham and pineapple", "pizza", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTWVFqf-DxD3Bfz0eo1LeuSO4njZRYObGyMnw&s"),
    product("Four Cheese", 1300, "Mozzarella, Cheddar, Parmesan, Blue Cheese", "pizza", "https://italianstreetkitchen.com/au/wp-content/uploads/2024/02/pizza-_0008_four_cheese_pizza_lunch.jpg"),
    product("Meat Lovers", 1400, "Pepperoni, ham, sausage, bacon", "pizza", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQmPR1_zMo2os323KG1lKiAYD3TAh18WcGYjg&s"),
    product("Veggie", 1100, "Peppers, onions, mushrooms, olives", "pizza", "https://placehold.co/400?text=Veggie"),
    product("BBQ Chicken", 1350, "Chicken, BBQ sauce, onions", "pizza", "https://placehold.co/400?text=BBQ+Chicken"),
    product("Mushroom", 1100, "Fresh mushrooms and herbs", "pizza", "https://placehold.co/400?text=Mushroom"),
    product("Spicy Italian", 1250, "Salami and chili peppers", "pizza", "https://placehold.co/400?text=Spicy+Italian"),
    product("Supreme", 1500, "Everything on it", "pizza", "https://placehold.co/400?text=Supreme"),
    // Drinks
    product("Cola", 250, "Refreshing cola", "drinks", "https://placehold.co/400?text=Cola"),
    product("Diet Cola", 250, "Sugar-free cola", "drinks", "https://placehold.co/400?text=Diet+Cola"),
    product("Lemonade", 300, "Freshly squeezed", "drinks", "https://placehold.co/400?text=Lemonade"),
    product("Orange Juice", 350, "100% Orange Juice", "drinks", "https://placehold.co/400?text=Orange+Juice"),
    product("Apple Juice", 350, "100% Apple Juice", "drinks", "https://placehold.co/400?text=Apple+Juice"),
    product("Water (Still)", 150, "Pure spring water", "drinks", "https://placehold.co/400?text=Water"),
    product("Water (Sparkling)", 150, "Sparkling water", "drinks", "https://placehold.co/400?text=Sparkling+Water"),
    product("Iced Tea", 280, "Peach flavored iced tea", "drinks", "https://placehold.co/400?text=Iced+Tea"),
    product("Coffee", 200, "Hot brewed coffee", "drinks", "https://placehold.co/400?text=Coffee"),
    product("Beer", 400, "Lager beer", "drinks", "https://placehold.co/400?text=Beer"),
    // Desserts
    product("Cheesecake", 500, "New York style cheesecake", "desserts", "https://placehold.co/400?text=Cheesecake"),
    product("Tiramisu", 550, "Italian coffee dessert", "desserts", "https://placehold.co/400?text=Tiramisu"),
    product("Chocolate Cake", 450, "Rich chocolate cake", "desserts", "https://placehold.co/400?text=Chocolate+Cake"),
    product("Brownie", 350, "Warm chocolate brownie", "desserts", "https://placehold.co/400?text=Brownie"),
    product("Ice Cream (Vanilla)", 300, "Scoop of vanilla", "desserts", "https://placehold.co/400?text=Vanilla+Ice+Cream"),
    product("Ice Cream (Chocolate)", 300, "Scoop of chocolate", "desserts", "https://placehold.co/400?text=Chocolate+Ice+Cream"),
    product("Fruit Salad", 400, "Fresh seasonal fruits", "desserts", "https://placehold.co/400?text=Fruit+Salad"),
    product("Panna Cotta", 500, "Creamy Italian dessert", "desserts", "https://placehold.co/400?text=Panna+Cotta"),
    product("Muffin", 250, "Blueberry muffin", "desserts", "https://placehold.co/400?text=Muffin"),
    product("Cookie", 150, "Chocolate chip cookie", "desserts", "https://placehold.co/400?text=Cookie"),
];

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub admin_id: i64,
    pub products: usize,
}

impl std::fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "admin user #{} and {} products",
            self.admin_id, self.products
        )
    }
}

/// Reset the database to the starter data
///
/// All existing rows are deleted. `admin_password_hash` must already be a
/// bcrypt hash; the admin account is created verified and active.
pub async fn seed_database(
    pool: &MySqlPool,
    admin_email: &str,
    admin_password_hash: &str,
) -> Result<SeedSummary, InfrastructureError> {
    let mut tx = pool.begin().await?;

    // Children first
    for table in ["order_items", "orders", "products", "users"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }

    let admin = sqlx::query(
        r#"
        INSERT INTO users (email, hashed_password, role, is_active, is_verified)
        VALUES (?, ?, ?, TRUE, TRUE)
        "#,
    )
    .bind(admin_email)
    .bind(admin_password_hash)
    .bind(Role::Admin.as_str())
    .execute(&mut *tx)
    .await?;

    for item in STARTER_CATALOG {
        sqlx::query(
            r#"
            INSERT INTO products (name, price, description, category, image_url)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.name)
        .bind(item.price())
        .bind(item.description)
        .bind(item.category)
        .bind(item.image_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        admin_id: admin.last_insert_id() as i64,
        products: STARTER_CATALOG.len(),
    };
    info!(admin = %admin_email, products = summary.products, "Database seeded");
    Ok(summary)
}
