//! Pokemon detail page with type effectiveness
//!
//! Usage: cargo run --example detail -- <ID or NAME>

use std::env;
use std::process;

use anyhow::Result;
use dexter_client::{ClientConfig, DexClient, PokemonDetail, PokemonRef};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_detail(pokemon: &PokemonDetail) {
    println!("{} #{}", pokemon.name, pokemon.id);
    if let Some(sprite) = &pokemon.sprite_url {
        println!("Sprite: {}", sprite);
    }

    let types: Vec<_> = pokemon.types.iter().map(|t| t.display_name()).collect();
    println!("Types: {}", types.join(" / "));

    println!("\nAbilities");
    for ability in &pokemon.abilities {
        if ability.is_hidden {
            println!("  - {} (Hidden Ability)", ability.name);
        } else {
            println!("  - {}", ability.name);
        }
    }

    println!("\nWeight: {} kg", pokemon.weight_kg());
    println!("Cry: {}", pokemon.cry_url());

    println!("\nStats");
    for stat in &pokemon.stats {
        println!("  {:<16} {:>3}", stat.name, stat.base_stat);
    }

    println!("\nType Effectiveness");
    for (category, types) in pokemon.effectiveness().resolved().iter() {
        if types.is_empty() {
            continue;
        }
        let names: Vec<_> = types.iter().map(|t| t.display_name()).collect();
        println!("  {:<22} {}", category.label(), names.join(", "));
    }

    println!("\n© 2024 Made with ❤️");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let Some(arg) = env::args().nth(1) else {
        eprintln!("Usage: detail <ID or NAME>");
        process::exit(1);
    };

    let client = DexClient::new(ClientConfig::default())?;
    match client.load_detail(PokemonRef::parse(&arg)).await {
        Some(pokemon) => print_detail(&pokemon),
        None => process::exit(1),
    }

    Ok(())
}
