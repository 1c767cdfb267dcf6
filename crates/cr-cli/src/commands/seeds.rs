use comfy_table::{ContentArrangement, Table};
use cr_core::seeds::SEED_WORDS;

pub fn run(json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&SEED_WORDS)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Seed", "Hint"]);
    for seed in &SEED_WORDS {
        table.add_row(vec![seed.word, seed.hint]);
    }

    println!("{table}");
    println!();
    println!("  {} seed words", SEED_WORDS.len());

    Ok(())
}
