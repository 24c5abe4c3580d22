pub mod check;
pub mod compose;
pub mod run;
pub mod score;

use focuspair_session::state::ViewMode;

/// Parse a `--layout` argument.
pub fn parse_view_mode(layout: &str) -> anyhow::Result<ViewMode> {
    match layout {
        "quad" | "4q" | "analytics" => Ok(ViewMode::Analytics4Q),
        "side-by-side" | "sbs" => Ok(ViewMode::SideBySide),
        other => anyhow::bail!("unknown layout '{other}' (expected: quad | side-by-side)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_parse() {
        assert_eq!(parse_view_mode("quad").unwrap(), ViewMode::Analytics4Q);
        assert_eq!(
            parse_view_mode("side-by-side").unwrap(),
            ViewMode::SideBySide
        );
        assert!(parse_view_mode("triptych").is_err());
    }
}
