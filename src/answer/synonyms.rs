//! Key-concept synonym table for the synonym-match strategy.
//!
//! An entry applies to a phrase when the phrase contains the concept as a
//! substring; its synonyms are then compared against the guess. Synonyms
//! shorter than four characters are skipped at match time.

pub static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    ("population", &["people", "inhabitants", "residents", "populace"]),
    ("gdp", &["gross domestic product", "economic output", "economy"]),
    ("density", &["people per square", "crowding"]),
    ("area", &["land size", "surface", "square kilometers"]),
    ("life expectancy", &["lifespan", "longevity", "expected lifetime"]),
    ("fertility", &["birth rate", "births per woman"]),
    ("mortality", &["death rate", "deaths"]),
    ("income", &["earnings", "wages", "salary"]),
    ("unemployment", &["jobless", "out of work"]),
    ("literacy", &["reading ability", "literate"]),
    ("inflation", &["price growth", "rising prices"]),
    ("emissions", &["carbon output", "pollution"]),
    ("energy", &["electricity", "power consumption"]),
    ("temperature", &["warmth", "how hot"]),
    ("rainfall", &["precipitation", "rain"]),
    ("elevation", &["altitude", "height"]),
    ("internet", &["online access", "connectivity"]),
    ("military", &["armed forces", "defense spending"]),
    ("tourism", &["tourists", "visitors"]),
    ("happiness", &["life satisfaction", "wellbeing"]),
    ("corruption", &["bribery", "graft index"]),
    ("debt", &["borrowing", "liabilities"]),
    ("exports", &["goods sold abroad", "trade out"]),
    ("imports", &["goods bought abroad", "trade in"]),
];
