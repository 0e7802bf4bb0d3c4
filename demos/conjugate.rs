use conjuga_rs::{Catalogue, generate_tense_paradigm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalogue = Catalogue::bundled()?;
    let id = std::env::args().nth(1);
    let verb = match id.as_deref() {
        Some(id) => catalogue.get(id).ok_or_else(|| format!("unknown verb '{}'", id))?,
        None => catalogue.first().ok_or("empty catalogue")?,
    };

    let forms = &verb.conjugation;
    println!("{} ({}) [{}]", verb.infinitive.to_uppercase(), verb.translation, verb.category);
    println!(
        "  {} | {} | {} | {} | {}",
        forms.infinitive, forms.simple_present, forms.past_simple, forms.past_participle, forms.gerund
    );
    println!();

    for entry in generate_tense_paradigm(forms) {
        let marker = if entry.highlighted { "*" } else { " " };
        println!("{} {:<27} {:<48} {}", marker, entry.tense_name, entry.structure_template, entry.example_sentence);
        println!("  {}", entry.translation_note);
    }
    Ok(())
}
