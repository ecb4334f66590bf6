//! インデントテスト
//!
//! コンテキストスタックとインデント提案の振る舞いを検証する。

#[cfg(test)]
mod tests {
    use gomode::mode::{Align, ContextKind};
    use gomode::runner::highlight_line;
    use gomode::{GoMode, Indent, ModeConfig, State};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn mode_with_unit(indent_unit: u32) -> GoMode {
        GoMode::new(ModeConfig {
            indent_unit,
            ..ModeConfig::default()
        })
        .unwrap()
    }

    /// 行を順に流し込み、最終状態を返すヘルパー関数
    fn feed_lines(mode: &GoMode, lines: &[&str]) -> State {
        let mut state = mode.start_state(0);
        for line in lines {
            highlight_line(mode, line, &mut state);
        }
        state
    }

    #[test]
    fn test_block_body_and_closer() {
        let mode = mode_with_unit(4);
        let mut state = feed_lines(&mode, &["if x {"]);
        assert_eq!(mode.indent(&mut state, "return y"), Indent::Columns(4));

        highlight_line(&mode, "    return y", &mut state);
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(0));
    }

    #[test]
    fn test_nested_blocks_keep_opener_indentation() {
        let mode = mode_with_unit(4);
        let mut state = feed_lines(
            &mode,
            &["func main() {", "    for {", "        if ok {", "            f()"],
        );
        assert_eq!(state.context.depth(), 4);
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(8));

        highlight_line(&mode, "        }", &mut state);
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(4));
        assert_eq!(mode.indent(&mut state, "g()"), Indent::Columns(8));

        highlight_line(&mode, "    }", &mut state);
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(0));
        highlight_line(&mode, "}", &mut state);
        assert_eq!(state.context.depth(), 1);
        assert_eq!(mode.indent(&mut state, "func f() {"), Indent::Columns(0));
    }

    #[test]
    fn test_leading_whitespace_of_text_is_ignored() {
        let mode = mode_with_unit(4);
        let mut state = feed_lines(&mode, &["if x {"]);
        assert_eq!(mode.indent(&mut state, "    }"), Indent::Columns(0));
    }

    #[test]
    fn test_alignment_under_open_paren() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["    result := compute(a,"]);
        let head = state.context.head();
        assert_eq!(head.kind, ContextKind::Paren);
        assert_eq!(head.align, Align::Column);
        assert_eq!(head.column, 21);
        assert_eq!(mode.indent(&mut state, "b)"), Indent::Columns(22));
        assert_eq!(mode.indent(&mut state, ")"), Indent::Columns(21));
    }

    #[test]
    fn test_opener_at_end_of_line_indents_by_unit() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["  values := []int{"]);
        assert_eq!(mode.indent(&mut state, "1,"), Indent::Columns(4));

        highlight_line(&mode, "    1,", &mut state);
        assert_eq!(state.context.head().align, Align::Indent);
        assert_eq!(mode.indent(&mut state, "2,"), Indent::Columns(4));
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(2));
    }

    #[test]
    fn test_consecutive_case_labels_align_with_switch() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["  switch x {", "  case 1:"]);
        assert_eq!(state.context.head().kind, ContextKind::Case);
        assert_eq!(state.context.head().indented, 2);

        assert_eq!(mode.indent(&mut state, "case 2:"), Indent::Columns(2));
        // 問い合わせによって case ブロックは閉じられる
        assert_eq!(state.context.head().kind, ContextKind::Brace);
    }

    #[test]
    fn test_default_label_closes_case_block() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["switch {", "case a:"]);
        assert_eq!(mode.indent(&mut state.clone(), "default:"), Indent::Columns(0));
        // 単語の途中は case ラベルではない
        assert_eq!(mode.indent(&mut state, "defaults()"), Indent::Columns(2));
        assert_eq!(state.context.head().kind, ContextKind::Case);
    }

    #[test]
    fn test_case_block_becomes_brace_on_next_line() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["switch {", "case a:", "  f()"]);
        assert_eq!(state.context.head().kind, ContextKind::Brace);
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(0));

        highlight_line(&mode, "}", &mut state);
        assert_eq!(state.context.depth(), 1);
    }

    #[test]
    fn test_closer_on_case_line_is_not_popped() {
        let mode = GoMode::default();
        let state = feed_lines(&mode, &["switch { case 1: }"]);
        assert_eq!(state.context.depth(), 2);
        assert_eq!(state.context.head().kind, ContextKind::Case);
    }

    #[test]
    fn test_closing_restores_indentation_of_opener_line() {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["  f(func() {", "          x()", "  })"]);
        assert_eq!(state.context.depth(), 1);
        assert_eq!(state.indented, 2);
        assert_eq!(mode.indent(&mut state, "g()"), Indent::Columns(0));
    }

    #[test_case(&["f(a, b)"] ; "single parens")]
    #[test_case(&["if x {", "  y := []int{1, 2}", "}"] ; "nested block")]
    #[test_case(&["m := map[string]int{", "  \"a\": 1,", "}"] ; "map literal")]
    #[test_case(&["x := f(", "  g(h[0]),", ")"] ; "call spanning lines")]
    #[test_case(&["s := \"{[(\"", "/* ) */"] ; "brackets in strings and comments")]
    fn test_balanced_input_restores_stack(lines: &[&str]) {
        let mode = GoMode::default();
        let mut state = feed_lines(&mode, &["func main() {"]);
        let depth = state.context.depth();
        let kind = state.context.head().kind;

        for line in lines {
            highlight_line(&mode, line, &mut state);
        }
        assert_eq!(state.context.depth(), depth);
        assert_eq!(state.context.head().kind, kind);
    }

    #[test]
    fn test_tabs_count_as_tab_stops() {
        let mode = GoMode::new(ModeConfig {
            indent_unit: 8,
            tab_size: 8,
            indent_with_tabs: true,
        })
        .unwrap();
        let mut state = feed_lines(&mode, &["func f() {", "\tif x {"]);
        assert_eq!(state.indented, 8);
        assert_eq!(mode.indent(&mut state, "y()"), Indent::Columns(16));
        assert_eq!(mode.indent(&mut state, "}"), Indent::Columns(8));
    }

    #[test]
    fn test_base_column() {
        let mode = mode_with_unit(4);
        let mut state = mode.start_state(6);
        assert_eq!(mode.indent(&mut state, "x"), Indent::Columns(6));
    }
}
