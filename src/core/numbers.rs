// File: src/core/numbers.rs
//
// Spelling out numerals for English text. Money, decimals, ordinals and plain
// integers are rewritten in that order, with four-digit values between 1000 and
// 3000 read the way years are spoken.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Rewrites numeric literals in already lower-cased text into words.
pub trait NumeralNormalizer: Send + Sync {
    fn expand(&self, text: &str) -> Result<String>;
}

impl<F> NumeralNormalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn expand(&self, text: &str) -> Result<String> {
        Ok(self(text))
    }
}

/// The built-in English normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNumbers;

impl NumeralNormalizer for EnglishNumbers {
    fn expand(&self, text: &str) -> Result<String> {
        Ok(normalize_numbers(text))
    }
}

static COMMA_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9][0-9,]+[0-9])").unwrap());
static DECIMAL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+\.[0-9]+)").unwrap());
static POUNDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"£([0-9,]*[0-9]+)").unwrap());
static DOLLARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([0-9.,]*[0-9]+)").unwrap());
static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)(st|nd|rd|th)").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 7] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
];

pub fn normalize_numbers(text: &str) -> String {
    let text = COMMA_NUMBER_RE.replace_all(text, |caps: &Captures| caps[1].replace(',', ""));
    let text = POUNDS_RE.replace_all(&text, "$1 pounds");
    let text = DOLLARS_RE.replace_all(&text, |caps: &Captures| expand_dollars(&caps[1]));
    let text = DECIMAL_NUMBER_RE.replace_all(&text, |caps: &Captures| caps[1].replace('.', " point "));
    let text = ORDINAL_RE.replace_all(&text, |caps: &Captures| match caps[1].parse::<u64>() {
        Ok(n) => ordinal_words(n),
        Err(_) => spell_digits(&caps[1]),
    });
    let text = NUMBER_RE.replace_all(&text, |caps: &Captures| match caps[0].parse::<u64>() {
        Ok(n) => expand_number(n),
        Err(_) => spell_digits(&caps[0]),
    });
    text.into_owned()
}

fn expand_dollars(amount: &str) -> String {
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        return format!("{} dollars", amount);
    }
    let dollars = parse_amount(parts[0]);
    let cents = parts.get(1).map_or(Some(0), |p| parse_amount(p));
    // Oversized amounts keep their digits so the integer pass spells them out.
    let (Some(dollars), Some(cents)) = (dollars, cents) else {
        return format!("{} dollars", amount);
    };
    let unit = |n: u64, one: &'static str, many: &'static str| if n == 1 { one } else { many };
    match (dollars, cents) {
        (0, 0) => "zero dollars".to_string(),
        (d, 0) => format!("{} {}", d, unit(d, "dollar", "dollars")),
        (0, c) => format!("{} {}", c, unit(c, "cent", "cents")),
        (d, c) => format!(
            "{} {}, {} {}",
            d,
            unit(d, "dollar", "dollars"),
            c,
            unit(c, "cent", "cents")
        ),
    }
}

fn parse_amount(digits: &str) -> Option<u64> {
    let digits = digits.replace(',', "");
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

fn expand_number(n: u64) -> String {
    if n > 1000 && n < 3000 {
        if n == 2000 {
            "two thousand".to_string()
        } else if n > 2000 && n < 2010 {
            format!("two thousand {}", number_to_words(n % 100))
        } else if n % 100 == 0 {
            format!("{} hundred", number_to_words(n / 100))
        } else {
            let (high, low) = (n / 100, n % 100);
            if low < 10 {
                format!("{} oh {}", number_to_words(high), ONES[low as usize])
            } else {
                format!("{} {}", number_to_words(high), two_digits(low))
            }
        }
    } else {
        number_to_words(n)
    }
}

fn two_digits(n: u64) -> String {
    let n = n as usize;
    match (n / 10, n % 10) {
        _ if n < 20 => ONES[n].to_string(),
        (tens, 0) => TENS[tens].to_string(),
        (tens, units) => format!("{}-{}", TENS[tens], ONES[units]),
    }
}

fn three_digits(n: u64, and_word: bool) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, rest) => two_digits(rest),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, rest) if and_word => format!("{} hundred and {}", ONES[h as usize], two_digits(rest)),
        (h, rest) => format!("{} hundred {}", ONES[h as usize], two_digits(rest)),
    }
}

fn cardinal(n: u64, and_word: bool) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }
    groups
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, &group)| group != 0)
        .map(|(scale, &group)| {
            let words = three_digits(group, and_word);
            if scale == 0 {
                words
            } else {
                format!("{} {}", words, SCALES[scale])
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cardinal reading of `n`, e.g. `1234` -> `one thousand, two hundred thirty-four`.
pub fn number_to_words(n: u64) -> String {
    cardinal(n, false)
}

/// Ordinal reading of `n`, e.g. `22` -> `twenty-second`.
pub fn ordinal_words(n: u64) -> String {
    let words = cardinal(n, true);
    let split = words.rfind(|c: char| c == ' ' || c == '-').map_or(0, |i| i + 1);
    let (head, last) = words.split_at(split);
    format!("{}{}", head, ordinal_suffix(last))
}

fn ordinal_suffix(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{}th", w),
    }
}

fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ONES[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinals() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(13), "thirteen");
        assert_eq!(number_to_words(40), "forty");
        assert_eq!(number_to_words(99), "ninety-nine");
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(123), "one hundred twenty-three");
        assert_eq!(number_to_words(1_000_000), "one million");
        assert_eq!(number_to_words(5_000_123), "five million, one hundred twenty-three");
    }

    #[test]
    fn years_are_read_in_pairs() {
        assert_eq!(normalize_numbers("1234"), "twelve thirty-four");
        assert_eq!(normalize_numbers("1905"), "nineteen oh five");
        assert_eq!(normalize_numbers("1900"), "nineteen hundred");
        assert_eq!(normalize_numbers("2000"), "two thousand");
        assert_eq!(normalize_numbers("2007"), "two thousand seven");
        assert_eq!(normalize_numbers("2019"), "twenty nineteen");
        assert_eq!(normalize_numbers("1000"), "one thousand");
        assert_eq!(normalize_numbers("3000"), "three thousand");
    }

    #[test]
    fn ordinals() {
        assert_eq!(normalize_numbers("1st"), "first");
        assert_eq!(normalize_numbers("22nd"), "twenty-second");
        assert_eq!(normalize_numbers("40th"), "fortieth");
        assert_eq!(normalize_numbers("101st"), "one hundred and first");
        assert_eq!(normalize_numbers("12th"), "twelfth");
    }

    #[test]
    fn money_and_decimals() {
        assert_eq!(normalize_numbers("$1"), "one dollar");
        assert_eq!(normalize_numbers("$3.50"), "three dollars, fifty cents");
        assert_eq!(normalize_numbers("$0.01"), "one cent");
        assert_eq!(normalize_numbers("$1.2.3"), "one point two.three dollars");
        assert_eq!(normalize_numbers("£20"), "twenty pounds");
        assert_eq!(normalize_numbers("3.14"), "three point fourteen");
    }

    #[test]
    fn oversized_money_is_read_digit_by_digit() {
        let nines = vec!["nine"; 20].join(" ");
        assert_eq!(
            normalize_numbers("$99999999999999999999 and 99999999999999999999"),
            format!("{} dollars and {}", nines, nines)
        );
        assert_eq!(
            normalize_numbers("$99999999999999999999.05"),
            format!("{} point five dollars", nines)
        );
    }

    #[test]
    fn thousands_commas_are_removed() {
        assert_eq!(normalize_numbers("1,000,000 people"), "one million people");
    }

    #[test]
    fn text_without_digits_is_untouched() {
        assert_eq!(normalize_numbers("hello world."), "hello world.");
        assert_eq!(normalize_numbers("11 12 13"), "eleven twelve thirteen");
    }

    #[test]
    fn oversized_integers_are_spelled_digit_by_digit() {
        let huge = "123456789012345678901234567890";
        let spelled = normalize_numbers(huge);
        assert!(spelled.starts_with("one two three"));
        assert_eq!(spelled.split(' ').count(), huge.len());
    }
}
