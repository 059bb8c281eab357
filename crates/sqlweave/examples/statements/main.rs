//! Statement builder example for sqlweave
//!
//! Run with: cargo run --example statements -p sqlweave
//!
//! Built SQL is logged on the `sqlweave.sql` target. Raise the filter to see
//! every build: RUST_LOG=sqlweave.sql=trace

use sqlweave::prelude::*;
use sqlweave::qb::SelectQb;
use sqlweave::TracingSqlHook;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print(label: &str, qb: &impl SqlQb, hook: &TracingSqlHook) {
    let built = qb.build_traced(hook);
    println!("-- {label}");
    println!("{}", built.query);
    println!("   params: {:?}\n", built.parameters);
}

fn active_users(name: Option<&str>, limit: u32) -> SelectQb {
    select(["id", "name", "email"])
        .from("users")
        .where_(eq("active", value(true)))
        .where_(name.map(|n| eq("name", collate(value(n), Collation::NoCase))))
        .order_by_desc("created_at")
        .limit(limit)
}

fn main() -> Result<(), SqlError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sqlweave.sql=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let hook = TracingSqlHook::new().level(Level::INFO).max_sql_length(120);

    // SELECT with optional filters
    print("all active users", &active_users(None, 20), &hook);
    print("active users named alice", &active_users(Some("alice"), 20), &hook);

    // Aggregates
    let per_category = select(["category"])
        .select_aliased(call(SqlFunction::Count, ["*"])?, "total")
        .from("products")
        .group_by("category")
        .having(gt(call(SqlFunction::Count, ["*"])?, value(10)));
    print("products per category", &per_category, &hook);

    // Upsert
    let upsert = insert("users", ["email", "name"])
        .values([value("alice@example.com"), value("Alice")])
        .on_conflict(conflict(["email"], None::<Expression>).set_excluded("name"))
        .returning(["id"]);
    print("upsert", &upsert, &hook);

    // UPDATE with a CASE expression
    let tiers = update("users").set(
        "tier",
        case(None::<Expression>)
            .when(gte("karma", value(1000)), static_value("gold"))
            .when(gte("karma", value(100)), static_value("silver"))
            .else_(static_value("bronze")),
    );
    print("recompute tiers", &tiers, &hook);

    // DELETE with EXISTS
    let orphans = delete("posts").where_(not(exists(
        select([static_value(1)])
            .from("users")
            .where_(eq("users.id", "posts.user_id")),
    )));
    print("delete orphans", &orphans, &hook);

    // Set operations
    let people = union_all([
        select(["id", "name"]).from("customers"),
        select(["id", "name"]).from("suppliers"),
    ]);
    print("everyone", &people, &hook);

    Ok(())
}
