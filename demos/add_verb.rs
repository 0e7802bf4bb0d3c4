use std::sync::Arc;

use conjuga_rs::{
    Catalogue, Config, EspeakSpeaker, Narrator, VerbList, VerbSubmission, generate_tense_paradigm,
};
use tracing_subscriber::EnvFilter;

/// Usage: add_verb <infinitive> <past simple> <past participle> <translation> [category]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).cloned().unwrap_or_default();
    let submission = VerbSubmission {
        infinitive: arg(0),
        past_simple: arg(1),
        past_participle: arg(2),
        translation: arg(3),
        category: arg(4),
        ..Default::default()
    };

    let record = match submission.build_record() {
        Ok(record) => record,
        Err(errors) => {
            for (field, message) in errors.messages() {
                eprintln!("{}: {}", field.label(), message);
            }
            std::process::exit(1);
        }
    };

    let mut list = VerbList::new(Arc::new(Catalogue::bundled()?));
    list.add(record.clone())?;
    println!("{} verbs in the list", list.len());

    for entry in generate_tense_paradigm(&record.conjugation) {
        println!("{:<27} {}", entry.tense_name, entry.example_sentence);
    }

    let config = Config::default();
    let narrator = Narrator::from_config(EspeakSpeaker::from_config(&config), &config);
    let outcome = narrator.play_verb(&record)?;
    println!("narration: {:?}", outcome);
    Ok(())
}
