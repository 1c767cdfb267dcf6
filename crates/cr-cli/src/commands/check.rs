use std::path::Path;

use colored::Colorize;
use cr_core::dictionary::DictionaryMode;
use serde::Serialize;

#[derive(Serialize)]
struct CheckReport {
    mode: DictionaryMode,
    words: Vec<WordVerdict>,
}

#[derive(Serialize)]
struct WordVerdict {
    word: String,
    valid: bool,
}

pub fn run(word_list: Option<&Path>, words: &[String], json: bool) -> Result<(), String> {
    let dictionary = super::load_dictionary(word_list);

    let verdicts: Vec<WordVerdict> = words
        .iter()
        .map(|w| {
            let word = w.trim().to_uppercase();
            let valid = dictionary.is_valid(&word);
            WordVerdict { word, valid }
        })
        .collect();

    if json {
        let report = CheckReport {
            mode: dictionary.mode(),
            words: verdicts,
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if dictionary.uses_fallback() {
        println!("  {}", super::FALLBACK_NOTICE.yellow());
        println!("  {}", super::FULL_DICTIONARY_HINT.dimmed());
    }
    for v in &verdicts {
        if v.valid {
            println!("  {}: {}", v.word.bold(), "valid".green());
        } else {
            println!("  {}: {}", v.word.bold(), "not a valid English word".red());
        }
    }

    Ok(())
}
