//! Amounts in words, Indian numbering (lakh and crore).

const UNITS: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "Zero", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const MAGNITUDES: [(u64, &str); 4] = [
    (10_000_000, "Crore"),
    (100_000, "Lakh"),
    (1_000, "Thousand"),
    (100, "Hundred"),
];

/// Spells out `amount` in English words using lakh/crore grouping.
///
/// # Examples
///
/// ```
/// use payroll_docs::calculation::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "Zero");
/// assert_eq!(amount_in_words(-5), "Minus Five");
/// assert_eq!(amount_in_words(100_000), "One Lakh");
/// assert_eq!(
///     amount_in_words(1_234_567),
///     "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven"
/// );
/// ```
pub fn amount_in_words(amount: i64) -> String {
    if amount == 0 {
        return UNITS[0].to_string();
    }
    if amount < 0 {
        return format!("Minus {}", spell(amount.unsigned_abs()));
    }
    spell(amount.unsigned_abs())
}

fn spell(mut n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (size, unit) in MAGNITUDES {
        let quotient = n / size;
        if quotient > 0 {
            // Crore quotients above 99 recurse through the same groups.
            parts.push(format!("{} {}", spell(quotient), unit));
            n %= size;
        }
    }

    if n > 0 {
        if !parts.is_empty() {
            parts.push("and".to_string());
        }
        parts.push(below_hundred(n as usize));
    }

    parts.join(" ")
}

fn below_hundred(n: usize) -> String {
    if n < UNITS.len() {
        return UNITS[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        units => format!("{} {}", TENS[n / 10], UNITS[units]),
    }
}
