// ============================================
// src/kana.rs
// かな表データ (ひらがな・カタカナ)
// ============================================

use std::fmt;

/// 文字の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Hiragana, Script::Katakana];

    pub fn name(self) -> &'static str {
        match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 表の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// 清音・濁音・半濁音
    Simple,
    /// 拗音 (きゃ など)
    Double,
    /// 外来語用の組み合わせ (カタカナのみ)
    Extra,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Simple => "simple",
            TableKind::Double => "double",
            TableKind::Extra => "extra",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [TableKind::Simple, TableKind::Double, TableKind::Extra]
            .into_iter()
            .find(|k| k.name() == name)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 表の1列 (チェックボックス1つ分)
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    /// (かな, ローマ字)。表の空欄は含めない
    pub cells: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub kind: TableKind,
    pub columns: &'static [Column],
}

/// 指定した文字種の表一覧 (表示順)
pub fn tables(script: Script) -> &'static [Table] {
    match script {
        Script::Hiragana => HIRAGANA_TABLES,
        Script::Katakana => KATAKANA_TABLES,
    }
}

/// 種類から表を探す
pub fn table(script: Script, kind: TableKind) -> Option<&'static Table> {
    tables(script).iter().find(|t| t.kind == kind)
}

// --------------------------------------------------
// ひらがな
// --------------------------------------------------

const HIRAGANA_TABLES: &[Table] = &[
    Table { kind: TableKind::Simple, columns: HIRAGANA_SIMPLE },
    Table { kind: TableKind::Double, columns: HIRAGANA_DOUBLE },
];

const HIRAGANA_SIMPLE: &[Column] = &[
    Column { label: "a", cells: &[("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o")] },
    Column { label: "ka", cells: &[("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko")] },
    Column { label: "sa", cells: &[("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so")] },
    Column { label: "ta", cells: &[("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to")] },
    Column { label: "na", cells: &[("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no")] },
    Column { label: "ha", cells: &[("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho")] },
    Column { label: "ma", cells: &[("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo")] },
    Column { label: "ya", cells: &[("や", "ya"), ("ゆ", "yu"), ("よ", "yo")] },
    Column { label: "ra", cells: &[("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro")] },
    Column { label: "wa", cells: &[("わ", "wa"), ("を", "wo")] },
    Column { label: "n", cells: &[("ん", "n")] },
    Column { label: "ga", cells: &[("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go")] },
    Column { label: "za", cells: &[("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo")] },
    Column { label: "da", cells: &[("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do")] },
    Column { label: "ba", cells: &[("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo")] },
    Column { label: "pa", cells: &[("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po")] },
];

const HIRAGANA_DOUBLE: &[Column] = &[
    Column { label: "kya", cells: &[("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo")] },
    Column { label: "sha", cells: &[("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho")] },
    Column { label: "cha", cells: &[("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho")] },
    Column { label: "nya", cells: &[("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo")] },
    Column { label: "hya", cells: &[("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo")] },
    Column { label: "mya", cells: &[("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo")] },
    Column { label: "rya", cells: &[("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo")] },
    Column { label: "gya", cells: &[("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo")] },
    Column { label: "ja", cells: &[("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo")] },
    Column { label: "bya", cells: &[("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo")] },
    Column { label: "pya", cells: &[("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo")] },
];

// --------------------------------------------------
// カタカナ
// --------------------------------------------------

const KATAKANA_TABLES: &[Table] = &[
    Table { kind: TableKind::Simple, columns: KATAKANA_SIMPLE },
    Table { kind: TableKind::Double, columns: KATAKANA_DOUBLE },
    Table { kind: TableKind::Extra, columns: KATAKANA_EXTRA },
];

const KATAKANA_SIMPLE: &[Column] = &[
    Column { label: "a", cells: &[("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o")] },
    Column { label: "ka", cells: &[("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko")] },
    Column { label: "sa", cells: &[("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so")] },
    Column { label: "ta", cells: &[("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to")] },
    Column { label: "na", cells: &[("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no")] },
    Column { label: "ha", cells: &[("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho")] },
    Column { label: "ma", cells: &[("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo")] },
    Column { label: "ya", cells: &[("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo")] },
    Column { label: "ra", cells: &[("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro")] },
    Column { label: "wa", cells: &[("ワ", "wa"), ("ヲ", "wo")] },
    Column { label: "n", cells: &[("ン", "n")] },
    Column { label: "ga", cells: &[("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go")] },
    Column { label: "za", cells: &[("ザ", "za"), ("ジ", "ji"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo")] },
    Column { label: "da", cells: &[("ダ", "da"), ("ヂ", "ji"), ("ヅ", "zu"), ("デ", "de"), ("ド", "do")] },
    Column { label: "ba", cells: &[("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo")] },
    Column { label: "pa", cells: &[("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po")] },
];

const KATAKANA_DOUBLE: &[Column] = &[
    Column { label: "kya", cells: &[("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo")] },
    Column { label: "sha", cells: &[("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho")] },
    Column { label: "cha", cells: &[("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho")] },
    Column { label: "nya", cells: &[("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo")] },
    Column { label: "hya", cells: &[("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo")] },
    Column { label: "mya", cells: &[("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo")] },
    Column { label: "rya", cells: &[("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo")] },
    Column { label: "gya", cells: &[("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo")] },
    Column { label: "ja", cells: &[("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo")] },
    Column { label: "bya", cells: &[("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo")] },
    Column { label: "pya", cells: &[("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo")] },
];

const KATAKANA_EXTRA: &[Column] = &[
    Column { label: "fa", cells: &[("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo")] },
    Column { label: "va", cells: &[("ヴァ", "va"), ("ヴィ", "vi"), ("ヴ", "vu"), ("ヴェ", "ve"), ("ヴォ", "vo")] },
    Column { label: "wi", cells: &[("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo")] },
    Column { label: "ti", cells: &[("ティ", "ti"), ("ディ", "di"), ("トゥ", "tu"), ("ドゥ", "du")] },
    Column { label: "she", cells: &[("シェ", "she"), ("チェ", "che"), ("ジェ", "je")] },
    Column { label: "tsa", cells: &[("ツァ", "tsa"), ("ツィ", "tsi"), ("ツェ", "tse"), ("ツォ", "tso")] },
    Column { label: "ye", cells: &[("イェ", "ye")] },
];
