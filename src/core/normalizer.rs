//! Half-width to full-width normalization for Japanese text.
//!
//! SHIFT-JIS sources frequently carry half-width katakana (U+FF61..U+FF9F),
//! the single-byte presentation forms. This module widens them to the
//! standard katakana block, including the half-width punctuation ｡｢｣､･ and
//! the voiced/semi-voiced sound marks ﾞﾟ.

/// Full-width equivalents of U+FF61..=U+FF9F, indexed by offset from U+FF61.
const FULLWIDTH: [char; 63] = [
    '。', '「', '」', '、', '・', // FF61..FF65 punctuation
    'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ',
    'カ', 'キ', 'ク', 'ケ', 'コ',
    'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ',
    'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ',
    'ヤ', 'ユ', 'ヨ',
    'ラ', 'リ', 'ル', 'レ', 'ロ',
    'ワ', 'ン', '゛', '゜',
];

/// Check the half-width range handled by [`normalize`] (U+FF01..=U+FF9F).
///
/// The low end of the range (U+FF01..U+FF60) holds full-width forms that a
/// wide conversion leaves alone; only U+FF61..U+FF9F have table entries.
pub fn is_halfwidth(c: char) -> bool {
    ('\u{FF01}'..='\u{FF9F}').contains(&c)
}

/// Look up the full-width form of a single half-width code point.
/// Returns `None` for code points the table does not cover.
fn to_fullwidth(c: char) -> Option<char> {
    match c {
        '\u{FF61}'..='\u{FF9F}' => Some(FULLWIDTH[c as usize - 0xFF61]),
        _ => None,
    }
}

/// Compose a widened letter with a following voiced sound mark (ﾞ).
/// The voiced forms sit one code point above their bases in the katakana
/// block, except ヴ.
fn compose_dakuten(c: char) -> Option<char> {
    match c {
        'ウ' => Some('ヴ'),
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ'
        | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ'
        | 'タ' | 'チ' | 'ツ' | 'テ' | 'ト'
        | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 1),
        _ => None,
    }
}

/// Compose a widened letter with a following semi-voiced sound mark (ﾟ).
/// Only the ハ row has semi-voiced forms, two code points above the base.
fn compose_handakuten(c: char) -> Option<char> {
    match c {
        'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(c as u32 + 2),
        _ => None,
    }
}

/// Widen one maximal half-width run.
///
/// Runs must be converted as a unit rather than per character: a sound mark
/// combines with the letter before it into a single precomposed code point
/// (ｶﾞ becomes ガ, ﾊﾟ becomes パ). An orphan mark widens standalone to ゛/゜.
fn widen_run(run: &str, out: &mut String) {
    let mut chars = run.chars().peekable();
    while let Some(c) = chars.next() {
        let wide = to_fullwidth(c).unwrap_or(c);
        let composed = match chars.peek() {
            Some('\u{FF9E}') => compose_dakuten(wide),
            Some('\u{FF9F}') => compose_handakuten(wide),
            _ => None,
        };
        match composed {
            Some(v) => {
                chars.next();
                out.push(v);
            }
            None => out.push(wide),
        }
    }
}

/// Normalize one line of text: every maximal run of half-width code points
/// is widened, everything else passes through unchanged in original order.
///
/// Total over all input; code points inside the half-width range that have
/// no table entry pass through as-is.
pub fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut run_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        if is_halfwidth(c) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else {
            if let Some(start) = run_start.take() {
                widen_run(&line[start..i], &mut out);
            }
            out.push(c);
        }
    }
    if let Some(start) = run_start {
        widen_run(&line[start..], &mut out);
    }

    out
}
