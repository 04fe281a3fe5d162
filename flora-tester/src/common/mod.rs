use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse the `--seeds` list. Negative values fold onto their magnitude.
pub fn resolve_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let seed = token
            .parse::<i64>()
            .map(i64::unsigned_abs)
            .or_else(|_| token.parse::<u64>())
            .with_context(|| format!("invalid seed {token:?}"))?;
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }
    if seeds.is_empty() {
        anyhow::bail!("no seeds given");
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_parse_and_dedupe() {
        let seeds = resolve_seeds(&split_csv("7, -7, 18446744073709551615, 42")).unwrap();
        assert_eq!(seeds, vec![7, u64::MAX, 42]);
    }

    #[test]
    fn bad_seeds_are_rejected() {
        let err = resolve_seeds(&split_csv("12,rose")).unwrap_err();
        assert!(err.to_string().contains("rose"));
        assert!(resolve_seeds(&[]).is_err());
    }
}
