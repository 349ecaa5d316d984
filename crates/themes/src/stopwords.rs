//! Fixed bilingual stopword list.
//!
//! Spanish function words and very common verbs/nouns, followed by English
//! auxiliaries and conjunctions. Entries shorter than three letters can never
//! match the tokenizer but are kept so the list reads as a whole.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const WORDS: &[&str] = &[
    // Spanish
    "el", "la", "de", "que", "y", "a", "en", "un", "ser", "se", "no", "haber",
    "por", "con", "su", "para", "como", "estar", "tener", "le", "lo", "todo",
    "pero", "más", "hacer", "o", "poder", "decir", "este", "ir", "otro", "ese",
    "si", "me", "ya", "ver", "porque", "dar", "cuando", "él", "muy", "sin",
    "vez", "mucho", "saber", "qué", "sobre", "mi", "alguno", "mismo", "yo",
    "también", "hasta", "año", "dos", "querer", "entre", "así", "primero",
    "desde", "grande", "eso", "ni", "nos", "llegar", "pasar", "tiempo", "ella",
    "sí", "día", "uno", "bien", "poco", "deber", "entonces", "poner", "cosa",
    "tanto", "hombre", "parecer", "nuestro", "tan", "donde", "ahora", "parte",
    "después", "vida", "quedar", "siempre", "creer", "hablar", "llevar", "dejar",
    "nada", "cada", "seguir", "menos", "nuevo", "encontrar", "algo", "solo",
    "sentir", "tomar", "mano", "venir", "pensar", "salir", "volver", "mayor",
    "guerra", "proceso", "estado", "mejor", "forma", "caso", "misma", "ante",
    "ellos", "tus", "son", "fue", "cual", "quien", "otros", "sus", "las", "los",
    "una", "del", "estos", "estas", "esta", "al", "es", "ha", "he", "has", "han",
    "era", "eras",
    // English
    "the", "is", "are", "was", "were", "be", "been", "being", "have", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might",
    "must", "can", "shall", "and", "or", "but", "if", "then",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| WORDS.iter().copied().collect());

/// Whether `word` (already lowercased) is ignored when naming a group.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
