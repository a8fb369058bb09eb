// Reference tables for English text.

/// Letter frequencies in percent, indexed `A..=Z`.
pub const LETTER_FREQUENCIES: [f32; 26] = [
    8.17, 1.29, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, // A-M
    6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07, // N-Z
];

pub const COMMON_WORDS: &[&str] = &[
    "A", "I", "AN", "AS", "AT", "BE", "BY", "DO", "GO", "HE", "IF", "IN", "IS", "IT", "ME", "MY",
    "NO", "OF", "ON", "OR", "SO", "TO", "UP", "US", "WE", "ALL", "AND", "ANY", "ARE", "BUT",
    "CAN", "DAY", "DID", "FOR", "GET", "HAD", "HAS", "HER", "HIM", "HIS", "HOW", "ITS", "MAY",
    "NEW", "NOT", "NOW", "ONE", "OUR", "OUT", "SEE", "SHE", "THE", "TOO", "TWO", "USE", "WAS",
    "WAY", "WHO", "YOU", "ALSO", "BEEN", "CALL", "COME", "DOWN", "EACH", "FIND", "FROM", "HAVE",
    "INTO", "JUST", "KNOW", "LIKE", "LONG", "LOOK", "MAKE", "MANY", "MORE", "MOST", "OVER",
    "SAID", "SOME", "THAN", "THAT", "THEM", "THEN", "THEY", "THIS", "TIME", "VERY", "WHAT",
    "WHEN", "WILL", "WITH", "WORD", "YOUR", "ABOUT", "COULD", "FIRST", "OTHER", "THEIR",
    "THERE", "THESE", "THING", "WHICH", "WOULD", "WRITE",
];

pub const COMMON_DIGRAMS: &[&str] = &[
    "TH", "HE", "IN", "ER", "AN", "RE", "ND", "AT", "ON", "NT", "HA", "ES", "ST", "EN", "ED",
    "TO", "IT", "OU", "EA", "HI", "IS", "OR", "TI", "AS", "TE", "ET", "NG", "OF", "AL", "DE",
    "SE", "LE", "SA", "SI", "AR", "VE", "RA", "LD", "UR",
];

pub const COMMON_TRIGRAMS: &[&str] = &[
    "THE", "AND", "ING", "HER", "HAT", "HIS", "THA", "ERE", "FOR", "ENT", "ION", "TER", "WAS",
    "YOU", "ITH", "VER", "ALL", "WIT", "THI", "TIO",
];
