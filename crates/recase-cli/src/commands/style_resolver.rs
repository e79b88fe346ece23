use recase_core::Style;

use super::error::CommandError;

/// Resolve a style name or alias given on the command line.
pub fn resolve_style(name: &str) -> Result<Style, CommandError> {
    name.parse::<Style>()
        .map_err(|_| CommandError::UnknownStyle {
            name: name.to_string(),
            suggestion: suggest_style(name),
        })
}

/// Suggest the closest style name for typos.
pub fn suggest_style(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    Style::ALL
        .into_iter()
        .filter(|style| levenshtein(style.name(), &input_lower) <= 2)
        .min_by_key(|style| levenshtein(style.name(), &input_lower))
        .map(|style| style.name().to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
