//! Built-in sample drafts used by `drafts seed`.

use draftsapp::model::{Sample, Tag};

pub fn builtin() -> Vec<Sample> {
    vec![
        Sample::new(
            "I hope you know I meant it, even when I didn’t say it right.",
            "I still replay the moment and rewrite it in my head.",
            Tag::Regret,
        ),
        Sample::new(
            "Thank you. I never sent it because it felt too small, but it wasn’t.",
            "",
            Tag::Gratitude,
        ),
        Sample::new(
            "I’m not angry anymore. I just wish we ended better.",
            "Some endings don’t feel finished.",
            Tag::Closure,
        ),
        Sample::new(
            "I miss who I was before I started comparing myself to everyone.",
            "It’s exhausting to perform happiness.",
            Tag::Sadness,
        ),
    ]
}
