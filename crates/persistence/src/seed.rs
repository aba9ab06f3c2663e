//! Startup seeding: default battery inventory and optional demo data.
//!
//! Both seeders are guarded so they only ever write into empty tables;
//! restarting the service never duplicates inventory or demo rows.

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::entities::{BatteryCategoryDb, VoucherDurationDb};
use crate::repositories::{
    BatteryRepository, CustomerPhotoRecord, CustomerProfileRecord, CustomerRepository,
    InternetAccessRepository, RentalRepository, WaterSaleRepository,
};

/// The catalog the operator starts with: two charging services and two
/// rentable battery products.
const DEFAULT_INVENTORY: &[(&str, BatteryCategoryDb, Option<&str>, f64, f64, i32)] = &[
    ("Phone Charge", BatteryCategoryDb::Charging, None, 250.0, 0.0, 0),
    ("Phone Bank", BatteryCategoryDb::Battery, Some("20000mAh"), 500.0, 100.0, 6),
    ("200wh Anker", BatteryCategoryDb::Battery, Some("200wh"), 1000.0, 200.0, 4),
    ("Large Battery", BatteryCategoryDb::Battery, Some("1kwh"), 2000.0, 300.0, 2),
];

/// Creates the default battery catalog (with numbered units) when the
/// catalog is empty.
pub async fn seed_default_inventory(pool: &PgPool) -> Result<(), sqlx::Error> {
    let repo = BatteryRepository::new(pool.clone());
    if repo.count_types().await? > 0 {
        return Ok(());
    }

    for &(name, category, capacity, rental_price, delivery_fee, quantity) in DEFAULT_INVENTORY {
        repo.create_type_with_units(name, category, capacity, rental_price, delivery_fee, quantity)
            .await?;
    }

    info!(entries = DEFAULT_INVENTORY.len(), "Seeded default battery inventory");
    Ok(())
}

/// Populates demo customers and a month of random transactions when the
/// customer table is empty. Intended for demo/dev databases only.
pub async fn seed_sample_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    let customer_repo = CustomerRepository::new(pool.clone());
    if customer_repo.count().await? > 0 {
        return Ok(());
    }

    let samples = [
        ("John", "Doe", "1234567890", "123 Main St", 1985, 3, 14),
        ("Jane", "Smith", "0987654321", "456 Elm St", 1992, 7, 2),
        ("Bob", "Johnson", "1122334455", "789 Oak St", 1978, 11, 23),
    ];

    let mut customer_ids = Vec::with_capacity(samples.len());
    for (first, family, phone, address, y, m, d) in samples {
        let customer = customer_repo
            .create(
                CustomerProfileRecord {
                    first_name: first,
                    middle_name: None,
                    family_name: family,
                    phone,
                    address: Some(address),
                    city: Some("Niodior"),
                    date_of_birth: NaiveDate::from_ymd_opt(y, m, d)
                        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
                    city_of_birth: "Dakar",
                    id_type: "national_id",
                    id_number: &format!("SN-{phone}"),
                },
                CustomerPhotoRecord::default(),
            )
            .await?;
        customer_ids.push(customer.id);
    }

    let battery_repo = BatteryRepository::new(pool.clone());
    let types = battery_repo.list_types().await?;
    let rental_repo = RentalRepository::new(pool.clone());
    let water_repo = WaterSaleRepository::new(pool.clone());
    let internet_repo = InternetAccessRepository::new(pool.clone());

    let now = Utc::now();

    // Roughly fifty transactions spread over the trailing 30 days, planned
    // up front so the RNG is not held across database calls. Rentals are
    // created type-only so the demo data never claims physical units.
    enum Planned {
        Rental { battery_type_id: i64 },
        Water { size: f64 },
        Internet { duration: VoucherDurationDb },
    }

    let plan: Vec<(i64, chrono::DateTime<Utc>, Planned)> = {
        let mut rng = rand::thread_rng();
        (0..50)
            .filter_map(|_| {
                let customer_id = *customer_ids.choose(&mut rng)?;
                let stamp = now - Duration::seconds(rng.gen_range(0..30 * 24 * 3600));
                let tx = match rng.gen_range(0..3) {
                    0 => Planned::Rental {
                        battery_type_id: types.choose(&mut rng)?.id,
                    },
                    1 => Planned::Water {
                        size: *[0.5, 1.5].choose(&mut rng)?,
                    },
                    _ => Planned::Internet {
                        duration: *[
                            VoucherDurationDb::Day,
                            VoucherDurationDb::ThreeDays,
                            VoucherDurationDb::Week,
                            VoucherDurationDb::Month,
                        ]
                        .choose(&mut rng)?,
                    },
                };
                Some((customer_id, stamp, tx))
            })
            .collect()
    };

    for (customer_id, stamp, tx) in plan {
        match tx {
            Planned::Rental { battery_type_id } => {
                let rental = rental_repo.create(customer_id, battery_type_id, None).await?;
                if let crate::repositories::RentalCreateOutcome::Created(rental) = rental {
                    backdate(pool, "battery_rentals", "rented_at", rental.id, stamp).await?;
                }
            }
            Planned::Water { size } => {
                let sale = water_repo.create(customer_id, size, size * 100.0).await?;
                backdate(pool, "water_sales", "sold_at", sale.id, stamp).await?;
            }
            Planned::Internet { duration } => {
                let code: domain::models::DurationType = duration.into();
                let password = shared::passwords::generate_wifi_password();
                let access = internet_repo
                    .create(customer_id, &password, duration, 500.0, stamp, code.expires_at(stamp))
                    .await?;
                backdate(pool, "internet_access", "purchased_at", access.id, stamp).await?;
            }
        }
    }

    info!(customers = customer_ids.len(), "Seeded demo sample data");
    Ok(())
}

async fn backdate(
    pool: &PgPool,
    table: &str,
    column: &str,
    id: i64,
    stamp: chrono::DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("UPDATE {table} SET {column} = $2 WHERE id = $1"))
        .bind(id)
        .bind(stamp)
        .execute(pool)
        .await?;
    Ok(())
}
