use eframe::egui::Color32;

use crate::classify::Label;

// ---------------------------------------------------------------------------
// Label styling: label → fixed display colors
// ---------------------------------------------------------------------------

/// Display style for one label: cell/banner background plus text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub background: Color32,
    pub text: Color32,
}

const SPAM_STYLE: LabelStyle = LabelStyle {
    background: Color32::from_rgb(200, 32, 32),
    text: Color32::WHITE,
};

const LESS_SPAM_STYLE: LabelStyle = LabelStyle {
    background: Color32::from_rgb(235, 200, 0),
    text: Color32::BLACK,
};

const NOT_SPAM_STYLE: LabelStyle = LabelStyle {
    background: Color32::from_rgb(0, 128, 0),
    text: Color32::WHITE,
};

/// Fixed style lookup: SPAM is red on white text, LESS SPAM yellow on
/// black text, NOT SPAM green on white text.
pub const fn style_for(label: Label) -> LabelStyle {
    match label {
        Label::Spam => SPAM_STYLE,
        Label::LessSpam => LESS_SPAM_STYLE,
        Label::NotSpam => NOT_SPAM_STYLE,
    }
}
