use std::fmt::Write;

use crate::parser::markers::youdao::MAX_STARS;
use crate::record::DictionaryRecord;

pub const NO_RESULT: &str = "No result";

/// Console view of a record, one block per populated field.
pub fn render_text(r: &DictionaryRecord) -> String {
    if !r.has_content() {
        return NO_RESULT.to_string();
    }

    let mut out = String::new();

    if let Some(list) = &r.list {
        let _ = writeln!(out, "{}", list);
        return out.trim().to_string();
    }

    if let Some(title) = &r.title {
        let _ = writeln!(out, "{}", title);
    }

    let sounds: Vec<&str> = [r.phsym.as_deref(), r.prons.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !sounds.is_empty() {
        let _ = writeln!(out, "  {}", sounds.join("  "));
    }

    let mut badges = Vec::new();
    if let Some(rank) = &r.rank {
        badges.push(rank.clone());
    }
    if r.stars > 0 {
        badges.push("★".repeat(r.stars.min(MAX_STARS) as usize));
    }
    if !badges.is_empty() {
        let _ = writeln!(out, "  {}", badges.join("  "));
    }

    if let Some(pattern) = &r.pattern {
        let _ = writeln!(out, "  {}", pattern);
    }
    if let Some(infs) = &r.infs {
        let _ = writeln!(out, "  {}", infs);
    }

    if !r.cdef.is_empty() {
        out.push('\n');
        for d in &r.cdef {
            let _ = writeln!(out, "  {:<6} {}", d.pos, d.def);
        }
    }

    if !r.basic.is_empty() {
        out.push('\n');
        for line in &r.basic {
            let _ = writeln!(out, "  {}", line);
        }
    }

    if let Some(translation) = &r.translation {
        let _ = writeln!(out, "\n  {}", translation);
    }

    for group in &r.defs {
        out.push('\n');
        if let Some(title) = &group.title {
            let _ = writeln!(out, "  {}", title);
        }
        for m in &group.meanings {
            let _ = writeln!(out, "    {:<16} {}", m.word, m.def);
        }
    }

    if let Some(note) = &r.discrimination {
        let _ = writeln!(out, "\n  {}", note);
    }

    if !r.sentences.is_empty() {
        out.push('\n');
        for (i, s) in r.sentences.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, s.en);
            let _ = writeln!(out, "     {}", s.cn);
            if !s.source.is_empty() {
                let _ = writeln!(out, "     {}", s.source);
            }
        }
    }

    if !r.sentence.is_empty() {
        out.push('\n');
        for (i, line) in r.sentence.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, line);
        }
    }

    out.trim().to_string()
}

pub fn render_json(r: &DictionaryRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConciseDef, Sentence, Suggestion, SuggestionGroup};

    #[test]
    fn empty_is_no_result() {
        assert_eq!(render_text(&DictionaryRecord::default()), NO_RESULT);
    }

    #[test]
    fn typo_list_alone() {
        let r = DictionaryRecord {
            list: Some("未找到".into()),
            ..Default::default()
        };
        assert_eq!(render_text(&r), "未找到");
    }

    #[test]
    fn full_entry_layout() {
        let r = DictionaryRecord {
            title: Some("hello".into()),
            phsym: Some("/həˈloʊ/".into()),
            rank: Some("CET4".into()),
            stars: 3,
            cdef: vec![ConciseDef { pos: "int.".into(), def: "喂".into() }],
            sentences: vec![Sentence {
                en: "Hello!".into(),
                cn: "你好！".into(),
                source: "example.com".into(),
            }],
            ..Default::default()
        };
        let text = render_text(&r);
        assert!(text.starts_with("hello\n  /həˈloʊ/\n  CET4  ★★★"));
        assert!(text.contains("  int.   喂"));
        assert!(text.ends_with("  1. Hello!\n     你好！\n     example.com"));
    }

    #[test]
    fn oversized_star_count_clamped() {
        let r = DictionaryRecord {
            title: Some("x".into()),
            stars: u32::MAX,
            ..Default::default()
        };
        assert_eq!(render_text(&r), "x\n  ★★★★★");
    }

    #[test]
    fn suggestions_listed() {
        let r = DictionaryRecord {
            title: Some("您要找的是不是".into()),
            defs: vec![SuggestionGroup {
                title: Some("英汉词典".into()),
                meanings: vec![Suggestion { word: "hello".into(), def: "int. 喂".into() }],
            }],
            ..Default::default()
        };
        let text = render_text(&r);
        assert!(text.contains("\n  英汉词典\n    hello"));
    }

    #[test]
    fn translation_only_is_shown() {
        let r = DictionaryRecord {
            translation: Some("今天天气很好".into()),
            ..Default::default()
        };
        assert_eq!(render_text(&r), "今天天气很好");
    }

    #[test]
    fn json_is_pretty_and_sparse() {
        let r = DictionaryRecord {
            title: Some("hi".into()),
            ..Default::default()
        };
        assert_eq!(render_json(&r).unwrap(), "{\n  \"title\": \"hi\"\n}");
    }
}
