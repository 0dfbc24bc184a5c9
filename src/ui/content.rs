//! Per-body content for the action windows.
//!
//! Everything here is derived from [`BodyData`] alone, so the windows can be
//! rebuilt every frame without caching.

use bevy::prelude::*;

use crate::catalog::BodyData;

/// One news item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub body: String,
}

impl Headline {
    fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Headlines for a body, lead item first.
///
/// Mars, Jupiter and Saturn get a body-specific lead ahead of the two
/// generic items every body shares.
pub fn news_for(body: &BodyData) -> Vec<Headline> {
    let name = &body.name;
    let shared = [
        Headline::new(
            format!("{name}の軌道上に新たな宇宙塵を発見"),
            format!(
                "観測衛星からの最新データにより、{name}の軌道周辺に微細な宇宙塵のリングが形成されている可能性が示唆されました。"
            ),
        ),
        Headline::new(
            format!("次世代{name}探査機、設計段階へ"),
            format!(
                "国際宇宙機関は、{name}の地表詳細マッピングを行うための次世代探査機の開発プロジェクトを承認しました。"
            ),
        ),
    ];

    let lead = match body.id.as_str() {
        "mars" => Some(Headline::new(
            "火星の地下湖、予想以上に広範囲か",
            "地下レーダー探査の結果、火星の南極冠の下に存在する液体水の湖が、従来の予想よりも広範囲に広がっているデータが得られました。",
        )),
        "jupiter" => Some(Headline::new(
            "大赤斑の嵐、活動が活発化",
            "木星の特徴である大赤斑の風速が、過去10年で最も速くなっていることが観測されました。気象メカニズムの解明が急がれます。",
        )),
        "saturn" => Some(Headline::new(
            "土星の輪に新しい「隙間」を確認",
            "カッシーニ探査機のアーカイブデータの再解析により、土星のBリング内に未知の小衛星によって作られたと思われる微細な隙間が発見されました。",
        )),
        _ => None,
    };

    lead.into_iter().chain(shared).collect()
}

/// Sentence appended to the lead headline's body.
pub const LEAD_FOOTNOTE: &str =
    "研究チームは、この発見が太陽系の形成過程を解明する重要な手がかりになると期待しています。";

/// Short feature article built around the body's Japanese description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnArticle {
    pub initial: char,
    pub heading: String,
    pub byline: &'static str,
    pub intro: String,
    pub quote: String,
    pub observation: String,
    pub section: &'static str,
    pub outlook: String,
}

pub fn column_for(body: &BodyData) -> ColumnArticle {
    let name = &body.name;
    ColumnArticle {
        initial: name.chars().next().unwrap_or('?'),
        heading: format!("{name}の謎に迫る"),
        byline: "執筆: アストロ博士 • 読了時間 3分",
        intro: format!(
            "なぜ{name}はこれほどまでにユニークなのでしょうか？ 他の天体とは一線を画すその特徴は、私たちの想像力をかき立ててやみません。"
        ),
        quote: format!("「{}」", body.description_ja),
        observation: format!(
            "望遠鏡で{name}を観測するとき、私たちは単に遠くの岩やガスの塊を見ているわけではありません。太陽系が誕生してから46億年という途方もない時間の積み重ねを目撃しているのです。"
        ),
        section: "探査の最前線",
        outlook: format!(
            "近年の研究では、{name}の環境が私たちが考えていたよりもはるかにダイナミックであることが分かってきました。今後の探査ミッションによって、教科書が書き換えられるような発見があるかもしれません。宇宙の旅はまだ始まったばかりなのです。"
        ),
    }
}

/// A single multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub question: String,
    pub options: [String; 3],
    /// Index of the correct option.
    pub answer: usize,
}

impl Quiz {
    fn new(question: impl Into<String>, options: [&str; 3], answer: usize) -> Self {
        Self {
            question: question.into(),
            options: options.map(str::to_owned),
            answer,
        }
    }
}

/// Option letter shown in front of choice `index` (A, B, C).
pub fn option_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

/// The question for a body; unknown ids get a generic one.
pub fn quiz_for(body: &BodyData) -> Quiz {
    match body.id.as_str() {
        "mercury" => Quiz::new(
            "水星の特徴として正しいものはどれ？",
            ["太陽系で最も大きい", "昼と夜の温度差が激しい", "厚い大気がある"],
            1,
        ),
        "venus" => Quiz::new(
            "金星が「地球の双子」と呼ばれる理由は？",
            ["大きさが似ているから", "水があるから", "緑が多いから"],
            0,
        ),
        "earth" => Quiz::new(
            "地球の表面の約何割が海で覆われている？",
            ["約30%", "約50%", "約70%"],
            2,
        ),
        "mars" => Quiz::new(
            "火星が「赤い惑星」と呼ばれる理由は？",
            ["燃えているから", "酸化鉄（サビ）の砂が多いから", "夕焼けが赤いから"],
            1,
        ),
        "jupiter" => Quiz::new(
            "木星にある巨大な嵐の渦は何と呼ばれる？",
            ["大赤斑", "黒点", "台風1号"],
            0,
        ),
        "saturn" => Quiz::new("土星のリングの主な成分は？", ["鉄の塊", "氷の粒", "ガス"], 1),
        "uranus" => Quiz::new(
            "天王星の自転の特徴は？",
            ["逆回転している", "横倒しに回転している", "回転していない"],
            1,
        ),
        "neptune" => Quiz::new("海王星の見た目の色は？", ["赤色", "黄色", "青色"], 2),
        _ => Quiz::new(
            format!("{}に関する正しい説明は？", body.name),
            ["太陽に一番近い", "太陽系の惑星である", "星ではない"],
            1,
        ),
    }
}

/// Result of an answered quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect { answer: usize },
}

/// Answer state of the open quiz window.
///
/// The first accepted answer locks the quiz until [`QuizState::reset`].
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    answered: Option<usize>,
}

impl QuizState {
    /// Record `choice`; ignored once answered or when out of range.
    pub fn answer(&mut self, quiz: &Quiz, choice: usize) -> Option<QuizOutcome> {
        if self.answered.is_some() || choice >= quiz.options.len() {
            return None;
        }
        self.answered = Some(choice);
        self.outcome(quiz)
    }

    pub fn answered(&self) -> Option<usize> {
        self.answered
    }

    pub fn is_locked(&self) -> bool {
        self.answered.is_some()
    }

    pub fn outcome(&self, quiz: &Quiz) -> Option<QuizOutcome> {
        self.answered.map(|choice| {
            if choice == quiz.answer {
                QuizOutcome::Correct
            } else {
                QuizOutcome::Incorrect {
                    answer: quiz.answer,
                }
            }
        })
    }

    pub fn reset(&mut self) {
        self.answered = None;
    }
}

/// Vocabulary grid for the English window: (English, Japanese).
pub const VOCABULARY: [(&str, &str); 4] = [
    ("Orbit", "軌道"),
    ("Surface", "地表"),
    ("Gravity", "重力"),
    ("System", "系"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BodyCatalog;

    fn body(id: &str) -> BodyData {
        BodyCatalog::default()
            .get(id)
            .cloned()
            .unwrap_or_else(|| BodyData::new(id, id.to_uppercase()))
    }

    #[test]
    fn test_special_lead_headlines() {
        for (id, title) in [
            ("mars", "火星の地下湖、予想以上に広範囲か"),
            ("jupiter", "大赤斑の嵐、活動が活発化"),
            ("saturn", "土星の輪に新しい「隙間」を確認"),
        ] {
            let news = news_for(&body(id));
            assert_eq!(news.len(), 3, "{id}");
            assert_eq!(news[0].title, title);
        }
    }

    #[test]
    fn test_other_bodies_share_generic_news() {
        let earth = body("earth");
        let news = news_for(&earth);
        assert_eq!(news.len(), 2);
        assert!(news.iter().all(|h| h.title.contains(&earth.name)));
    }

    #[test]
    fn test_column_quotes_description() {
        let venus = body("venus");
        let column = column_for(&venus);
        assert!(column.quote.contains(&venus.description_ja));
        assert!(column.heading.starts_with(&venus.name));
        assert_eq!(Some(column.initial), venus.name.chars().next());
    }

    #[test]
    fn test_every_catalog_body_has_valid_quiz() {
        for data in BodyCatalog::default().iter() {
            let quiz = quiz_for(data);
            assert!(quiz.answer < quiz.options.len(), "{}", data.id);
            assert!(!quiz.question.starts_with(&data.name), "{} fell back", data.id);
        }
    }

    #[test]
    fn test_unknown_body_gets_generic_quiz() {
        let quiz = quiz_for(&BodyData::new("ceres", "Ceres"));
        assert!(quiz.question.starts_with("Ceres"));
        assert_eq!(quiz.answer, 1);
    }

    #[test]
    fn test_quiz_locks_after_first_answer() {
        let quiz = quiz_for(&body("earth"));
        let mut state = QuizState::default();

        assert_eq!(
            state.answer(&quiz, 0),
            Some(QuizOutcome::Incorrect { answer: 2 })
        );
        assert!(state.is_locked());

        assert_eq!(state.answer(&quiz, 2), None);
        assert_eq!(state.answered(), Some(0));
        assert_eq!(
            state.outcome(&quiz),
            Some(QuizOutcome::Incorrect { answer: 2 })
        );

        state.reset();
        assert_eq!(state.answer(&quiz, 2), Some(QuizOutcome::Correct));
    }

    #[test]
    fn test_out_of_range_answer_ignored() {
        let quiz = quiz_for(&body("mars"));
        let mut state = QuizState::default();
        assert_eq!(state.answer(&quiz, 3), None);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(
            (0..3).map(option_letter).collect::<String>(),
            "ABC"
        );
    }
}
