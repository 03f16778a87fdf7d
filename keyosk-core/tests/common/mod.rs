use keyosk_core::{InMemorySource, KeyboardConfig, KeyboardSession, LayoutDefinition};

/// A small but complete layout: shift states, a dead-key cap, two DEADKEY
/// blocks, and one ligature. Columns are 1-based over the value columns.
#[allow(dead_code)]
pub const EN_KLC: &str = "\
KBD test \"Test Keyboard Layout\"

LOCALENAME \"en-US\"

SHIFTSTATE

0 //Column 1
1 //Column 2 : Shft
2 //Column 3 :       Ctrl
6 //Column 4 :       Ctrl Alt
7 //Column 5 : Shft  Ctrl Alt

LAYOUT

//SC VK_ Cap Col1 Col2 Col3 Col4 Col5

02 1 0 0031 0021 -1 -1 -1 // 1, exclamation
1e A 1 0061 0041 -1 00e4 00c4 // a, A, -, a diaeresis, A diaeresis
1f S 1 0073 0053 -1 -1 -1 // s, S
28 OEM_7 0 00b4@ 0060@ -1 -1 -1 // acute dead key, grave dead key
2b OEM_5 0 %% -1 -1 -1 -1 // ligature key
35 OEM_2 0 002f 003f -1 -1 -1 // solidus, question mark

LIGATURE

//VK_ Mod Char0 Char1
//--- --- ----- -----

OEM_5 0 0041 0042 // A + B

DEADKEY 00b4

0061 00e1 // a -> a acute
0065 00e9 // e -> e acute

DEADKEY 0060

0061 00e0 // a -> a grave

KEYNAME

01 Esc
";

/// Minimal right-to-left layout.
#[allow(dead_code)]
pub const AR_KLC: &str = "\
KBD artest \"Arabic Test Layout\"

LOCALENAME \"ar-SA\"

SHIFTSTATE

0 //Column 1
1 //Column 2 : Shft

LAYOUT

02 1 0 0661 0021 -1 // arabic-indic one
1e A 0 0627 0623 -1 // alef

KEYNAME

01 Esc
";

#[allow(dead_code)]
pub fn layout(text: &str) -> LayoutDefinition {
    LayoutDefinition::parse(text).expect("fixture layout parses")
}

/// Session over in-memory layouts; `languages` pairs file names with text.
#[allow(dead_code)]
pub fn session_with(languages: &[(&str, &str)]) -> KeyboardSession {
    let mut source = InMemorySource::new();
    for (name, text) in languages {
        source.insert(*name, *text);
    }
    let list: Vec<&str> = languages.iter().map(|(name, _)| *name).collect();
    let config = KeyboardConfig::with_languages(&list.join(","));
    KeyboardSession::new(config, Box::new(source)).expect("fixture session builds")
}

#[allow(dead_code)]
pub fn en_session() -> KeyboardSession {
    session_with(&[("english", EN_KLC)])
}
