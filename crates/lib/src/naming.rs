/// Collapses a count into a short label: `999`, `1k`, `999k`, `1M`.
/// Always truncates toward zero.
pub fn abbreviate(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}M", n / 1_000_000)
    }
}

/// `crs_matrix_<abbreviated size>_<seed>.txt`
pub fn output_file_name(size: u32, seed: u64) -> String {
    format!("crs_matrix_{}_{}.txt", abbreviate(size.into()), seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviates_by_magnitude() {
        assert_eq!(abbreviate(0), "0");
        assert_eq!(abbreviate(999), "999");
        assert_eq!(abbreviate(1000), "1k");
        assert_eq!(abbreviate(999_999), "999k");
        assert_eq!(abbreviate(1_000_000), "1M");
    }

    #[test]
    fn abbreviation_truncates() {
        assert_eq!(abbreviate(1_999), "1k");
        assert_eq!(abbreviate(2_500_000), "2M");
    }

    #[test]
    fn file_name_embeds_size_and_seed() {
        assert_eq!(output_file_name(25_000, 4711), "crs_matrix_25k_4711.txt");
        assert_eq!(output_file_name(10, 0), "crs_matrix_10_0.txt");
    }
}
