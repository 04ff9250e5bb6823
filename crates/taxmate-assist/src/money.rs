//! Dollar formatting with thousands separators.

/// Format an amount as `$85,000` or `$1,234.56`.
///
/// Whole amounts print without cents; fractional amounts print with two
/// decimals. Negative amounts print as `-$1,959`.
pub fn format_dollars(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}${whole}"),
        fraction => format!("{sign}${whole}.{fraction:02}"),
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}
