//! Storefront Walkthrough Example
//!
//! Seeds the catalog, projects it through the given search/sort selection,
//! reserves a few spaces, and checks out.
//!
//! Use `-q` to filter the catalog by subject or location
//! Use `-s` / `-d` to sort the projected catalog

use anyhow::Result;
use clap::Parser;

use satchel::{
    catalog::Catalog,
    checkout::Customer,
    fixtures::seed_lessons,
    session::Session,
    utils::ExampleStorefrontArgs,
};

/// Storefront Walkthrough Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = ExampleStorefrontArgs::parse();

    let mut session = Session::new(Catalog::from_lessons(seed_lessons()));

    session.query = args.query.clone();
    session.sort = args.sort_selection();

    println!("Catalog ({} shown):", session.visible_lessons().len());

    for lesson in session.visible_lessons() {
        println!(
            "  {:<12} {:<10} {:>4} AED  {} spaces",
            lesson.subject, lesson.location, lesson.price, lesson.spaces
        );
    }

    let first = session
        .visible_lessons()
        .first()
        .map(|lesson| lesson.id.clone());

    if let Some(id) = first {
        session.reserve(&id)?;
        session.increase(&id)?;

        println!(
            "\nReserved 2 spaces of lesson {id}: {} items, {} AED total",
            session.cart.count(),
            session.cart.total()
        );

        session.customer = Customer {
            first_name: "Amira".to_owned(),
            last_name: "Haddad".to_owned(),
            city: "Dubai".to_owned(),
            address: "14 Al Wasl Road".to_owned(),
            postal: "12345".to_owned(),
            is_gift: false,
        };

        let order = session.submit()?;

        println!(
            "Submitted order for {} {}: {} AED",
            order.customer.first_name, order.customer.last_name, order.total
        );
    } else {
        println!("\nNothing matched the query; nothing to reserve.");
    }

    Ok(())
}
