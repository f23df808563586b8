//! Database seeder for Librarium development and testing.
//!
//! Seeds a handful of authors and books through the domain services so the
//! same invariants apply as in production writes.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use librarium_db::{AuthorService, BookService};
use librarium_shared::catalog::{AuthorRequest, BookRequest};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = librarium_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let authors = AuthorService::new(db.clone());
    let books = BookService::new(db, None);

    if !authors
        .get_all()
        .await
        .expect("Failed to query authors")
        .is_empty()
    {
        println!("Catalog already has authors, skipping seed.");
        return;
    }

    println!("Seeding authors...");
    let mut author_ids = Vec::new();
    for (name, city, email, birth) in [
        (
            "Gabriel Garcia Marquez",
            "Aracataca",
            "gabo@librarium.dev",
            (1927, 3, 6),
        ),
        (
            "Isabel Allende",
            "Lima",
            "isabel@librarium.dev",
            (1942, 8, 2),
        ),
        (
            "Jorge Luis Borges",
            "Buenos Aires",
            "borges@librarium.dev",
            (1899, 8, 24),
        ),
    ] {
        let created = authors
            .create(&AuthorRequest {
                name: name.to_string(),
                birth_city: city.to_string(),
                email: email.to_string(),
                birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2)
                    .expect("valid seed date"),
            })
            .await
            .expect("Failed to seed author");
        println!("  {} (id {})", created.name, created.id);
        author_ids.push(created.id);
    }

    println!("Seeding books...");
    for (title, genre, year, pages, author_idx) in [
        ("Cien anos de soledad", "Realismo magico", 1967, 417, 0),
        ("El amor en los tiempos del colera", "Novela", 1985, 368, 0),
        ("La casa de los espiritus", "Novela", 1982, 433, 1),
        ("Ficciones", "Cuentos", 1944, 203, 2),
    ] {
        let created = books
            .create(&BookRequest {
                title: title.to_string(),
                genre: genre.to_string(),
                year,
                pages,
                author_id: author_ids[author_idx],
            })
            .await
            .expect("Failed to seed book");
        println!("  {} (id {})", created.title, created.id);
    }

    println!("Seeding complete!");
}
