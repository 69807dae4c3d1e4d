//! Intent classification using regex patterns.
//!
//! Fast pattern-based category detection for user input. No ML model
//! required - pure Rust regex matching over an ordered rule table.
//!
//! The evaluation order is a hard contract, not an implementation detail:
//! categories overlap lexically (the word "stress" appears in both an
//! informational pattern and an affective pattern), and the first matching
//! rule wins. Informational categories additionally require a question-like
//! lead phrase; without it they are never selected, even when topic keywords
//! are present.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Symbolic category assigned to one classified input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Greeting (hello, hi, hey, etc.)
    Greeting,
    /// Anxiety-affect (nervous, worried, panic, etc.)
    Anxiety,
    /// Depression-affect (sad, hopeless, empty, etc.)
    Depression,
    /// Stress-affect (overwhelmed, pressure, etc.)
    Stress,
    /// Positive-affect (happy, wonderful, excited, etc.)
    Positive,
    /// Gratitude (thankful, appreciate, etc.)
    Gratitude,
    /// Crisis/self-harm indicators
    Emergency,
    /// Unknown/default, universal fallback
    Unsure,
    /// Informational query about depression
    InfoDepression,
    /// Informational query about anxiety disorders
    InfoAnxiety,
    /// Informational query about bipolar disorder
    InfoBipolar,
    /// Informational query about schizophrenia
    InfoSchizophrenia,
    /// Informational query about ADHD
    InfoAdhd,
    /// Informational query about stress physiology
    InfoStress,
    /// Informational query about mindfulness
    InfoMindfulness,
    /// Informational query about therapy
    InfoTherapy,
    /// Informational query about trauma
    InfoTrauma,
    /// Informational query about psychiatric medication
    InfoMedication,
}

impl Category {
    /// Every category, in rule-table order. Useful for exhaustive checks.
    pub const ALL: [Category; 18] = [
        Category::Greeting,
        Category::Anxiety,
        Category::Depression,
        Category::Stress,
        Category::Positive,
        Category::Gratitude,
        Category::Emergency,
        Category::Unsure,
        Category::InfoDepression,
        Category::InfoAnxiety,
        Category::InfoBipolar,
        Category::InfoSchizophrenia,
        Category::InfoAdhd,
        Category::InfoStress,
        Category::InfoMindfulness,
        Category::InfoTherapy,
        Category::InfoTrauma,
        Category::InfoMedication,
    ];

    /// Returns a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::Stress => "stress",
            Category::Positive => "positive",
            Category::Gratitude => "gratitude",
            Category::Emergency => "emergency",
            Category::Unsure => "unsure",
            Category::InfoDepression => "info_depression",
            Category::InfoAnxiety => "info_anxiety",
            Category::InfoBipolar => "info_bipolar",
            Category::InfoSchizophrenia => "info_schizophrenia",
            Category::InfoAdhd => "info_adhd",
            Category::InfoStress => "info_stress",
            Category::InfoMindfulness => "info_mindfulness",
            Category::InfoTherapy => "info_therapy",
            Category::InfoTrauma => "info_trauma",
            Category::InfoMedication => "info_medication",
        }
    }

    /// Whether this category answers an informational query rather than an
    /// emotional state.
    pub fn is_informational(&self) -> bool {
        self.label().starts_with("info_")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Compile patterns once at startup. Input is lowercased before matching, so
// the patterns themselves are all-lowercase. Most keyword groups anchor only
// the leading word boundary so that inflected forms still match ("anxious",
// "stressed", "killed").

/// Question-like lead phrase gating every informational category.
static INFO_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(what\s+is|definition\s+of|tell\s+me\s+about|explain|define|how\s+does|describe)\b")
        .expect("Invalid regex: informational lead phrases")
});

/// Informational topic rules, tried in order once the lead phrase matched.
static TOPIC_RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Category::InfoDepression,
            Regex::new(r"\b(depression|major\s+depress|depressive\s+disorder)")
                .expect("Invalid regex: depression topic"),
        ),
        (
            Category::InfoAnxiety,
            Regex::new(r"\b(anxiety|anxious|gad|panic\s+disorder|social\s+anxiety)")
                .expect("Invalid regex: anxiety topic"),
        ),
        (
            Category::InfoBipolar,
            Regex::new(r"\b(bipolar|mania|hypomania|mood\s+disorder|mood\s+swings)")
                .expect("Invalid regex: bipolar topic"),
        ),
        (
            Category::InfoSchizophrenia,
            Regex::new(r"\b(schizophrenia|psychosis|psychotic|hallucination|delusion)")
                .expect("Invalid regex: schizophrenia topic"),
        ),
        (
            Category::InfoAdhd,
            Regex::new(r"\b(adhd|attention\s+deficit|hyperactivity)")
                .expect("Invalid regex: adhd topic"),
        ),
        (
            Category::InfoStress,
            Regex::new(r"\b(stress|stressor|cortisol|hpa\s+axis)")
                .expect("Invalid regex: stress topic"),
        ),
        (
            Category::InfoMindfulness,
            Regex::new(r"\b(mindful|meditation|present\s+moment|mbsr|mbct)")
                .expect("Invalid regex: mindfulness topic"),
        ),
        (
            Category::InfoTherapy,
            Regex::new(r"\b(therapy|counseling|psychotherapy|cbt|dbt)")
                .expect("Invalid regex: therapy topic"),
        ),
        (
            Category::InfoTrauma,
            Regex::new(r"\b(trauma|ptsd|post\s+traumatic|childhood\s+trauma)")
                .expect("Invalid regex: trauma topic"),
        ),
        (
            Category::InfoMedication,
            Regex::new(r"\b(medication|psychiatric\s+drug|antidepressant|ssri|snri|antipsychotic)")
                .expect("Invalid regex: medication topic"),
        ),
    ]
});

/// Affective and conversational rules, tried in order after the
/// informational tier. The anxiety group includes "stress", so the distinct
/// stress tier below it is only reachable through its other keywords.
static AFFECT_RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Category::Greeting,
            Regex::new(r"\b(hello|hi|hey|greetings)\b").expect("Invalid regex: greeting keywords"),
        ),
        (
            Category::Anxiety,
            Regex::new(r"\b(anxi|nervous|worried|panic|stress|tense)")
                .expect("Invalid regex: anxiety keywords"),
        ),
        (
            Category::Depression,
            Regex::new(r"\b(depress|sad|low|down|hopeless|empty)")
                .expect("Invalid regex: depression keywords"),
        ),
        (
            Category::Stress,
            Regex::new(r"\b(stress|overwhelm|pressure|too\s+much)")
                .expect("Invalid regex: stress keywords"),
        ),
        (
            Category::Positive,
            Regex::new(r"\b(happy|great|good|wonderful|joy|excited)")
                .expect("Invalid regex: positive keywords"),
        ),
        (
            Category::Gratitude,
            Regex::new(r"\b(grateful|thankful|appreciate|blessing)")
                .expect("Invalid regex: gratitude keywords"),
        ),
        (
            Category::Emergency,
            Regex::new(r"\b(suicide|kill|die|harm|hurt|end|life)")
                .expect("Invalid regex: crisis keywords"),
        ),
    ]
});

/// One entry in the ordered dispatch table.
struct DispatchRule {
    category: Category,
    pattern: Regex,
}

/// Category classifier using an ordered regex rule table.
pub struct IntentClassifier {
    info_lead: Regex,
    topic_rules: Vec<DispatchRule>,
    affect_rules: Vec<DispatchRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Creates a new classifier with the full rule table.
    pub fn new() -> Self {
        let to_rules = |rules: &[(Category, Regex)]| -> Vec<DispatchRule> {
            rules
                .iter()
                .map(|(category, pattern)| DispatchRule {
                    category: *category,
                    pattern: pattern.clone(),
                })
                .collect()
        };

        Self {
            info_lead: INFO_LEAD.clone(),
            topic_rules: to_rules(&TOPIC_RULES[..]),
            affect_rules: to_rules(&AFFECT_RULES[..]),
        }
    }

    /// Classifies one input into exactly one category.
    ///
    /// The input is case-normalized, then the rule tiers are evaluated in
    /// order; the first matching rule wins and no categories stack. Input
    /// matching nothing resolves to [`Category::Unsure`].
    pub fn classify(&self, text: &str) -> Category {
        let text = text.to_lowercase();

        if self.info_lead.is_match(&text) {
            for rule in &self.topic_rules {
                if rule.pattern.is_match(&text) {
                    return rule.category;
                }
            }
        }

        for rule in &self.affect_rules {
            if rule.pattern.is_match(&text) {
                return rule.category;
            }
        }

        Category::Unsure
    }
}
