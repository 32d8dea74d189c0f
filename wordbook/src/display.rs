use dictionary::{Entry, LookupResult};

pub fn render(result: &LookupResult) {
    for entry in result {
        render_entry(entry);
    }
}

fn render_entry(entry: &Entry) {
    match &entry.phonetic {
        Some(phonetic) => println!("{}  {phonetic}", entry.word),
        None => println!("{}", entry.word),
    }
    if let Some(origin) = &entry.origin {
        println!("  origin: {origin}");
    }
    for meaning in &entry.meanings {
        println!("    {}:", meaning.part_of_speech);
        for definition in &meaning.definitions {
            println!("        {}", definition.definition);
            if let Some(example) = &definition.example {
                println!("          example: {example}");
            }
        }
        if !meaning.synonyms.is_empty() {
            println!("      synonyms: {}", meaning.synonyms.join(", "));
        }
        if !meaning.antonyms.is_empty() {
            println!("      antonyms: {}", meaning.antonyms.join(", "));
        }
    }
}

pub fn render_word_list(words: &[String]) {
    for (index, word) in words.iter().enumerate() {
        println!("{}. {word}", index + 1);
    }
}
