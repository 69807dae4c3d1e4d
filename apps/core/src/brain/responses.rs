//! Pre-authored reply candidates and selection.
//!
//! The response tables are immutable configuration data loaded once at
//! construction. Every category carries at least one candidate and the
//! `unsure` set doubles as the universal fallback.

use rand::seq::SliceRandom;
use std::collections::HashMap;
use tracing::error;

use super::classifier::Category;

const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm here to support you. How are you feeling today?",
    "Hi there! I'm your wellness companion. How can I help you today?",
];

const ANXIETY_RESPONSES: &[&str] = &[
    "It sounds like you might be experiencing some anxiety. Remember to take deep breaths - in for 4 counts, hold for 4, out for 6.",
    "Anxiety can be challenging. Try grounding yourself by naming 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste.",
];

const DEPRESSION_RESPONSES: &[&str] = &[
    "I hear that you're feeling down. Remember that it's okay to not be okay sometimes. Is there something small you could do today that might bring you a moment of joy?",
    "When feeling low, it can help to connect with others. Is there someone you could reach out to today, even just for a brief conversation?",
];

const STRESS_RESPONSES: &[&str] = &[
    "It sounds like you're under a lot of pressure. Taking even 5 minutes for yourself can help - perhaps a short walk or a cup of tea?",
    "Stress can be overwhelming. Would it help to write down your thoughts or prioritize what needs your attention first?",
];

const POSITIVE_RESPONSES: &[&str] = &[
    "I'm glad to hear you're doing well! It's great to celebrate those positive moments.",
    "That's wonderful to hear! What's something you're looking forward to?",
];

const GRATITUDE_RESPONSES: &[&str] = &[
    "Practicing gratitude is powerful. What are three small things you appreciate today?",
    "That's a beautiful perspective. Noticing the good things, even small ones, can really shift our outlook.",
];

const EMERGENCY_RESPONSES: &[&str] = &[
    "It sounds like you're going through a really difficult time. Please remember that immediate help is available by calling or texting 988 in the US to reach the Crisis & Suicide Lifeline.",
    "I'm concerned about what you're sharing. Please consider reaching out to a crisis helpline like 988 (US) where trained professionals can provide immediate support.",
];

const UNSURE_RESPONSES: &[&str] = &[
    "I'm not quite sure I understand. Could you tell me more about how you're feeling?",
    "I want to be helpful. Could you share a bit more about what's on your mind?",
];

const INFO_DEPRESSION_RESPONSES: &[&str] = &[
    "Depression (Major Depressive Disorder) is a common but serious mood disorder characterized by persistent feelings of sadness, hopelessness, and loss of interest in activities once enjoyed. It affects how you feel, think, and handle daily activities.\n\nClinically, depression involves symptoms that persist for at least two weeks, including changes in sleep, appetite, energy level, concentration, and self-worth. Depression has biological, psychological, and social components, and is not a sign of personal weakness or character flaw.\n\nTreatment typically involves psychotherapy (such as cognitive-behavioral therapy), medication (like SSRIs), or a combination of both. Lifestyle changes including regular exercise, healthy sleep habits, and social connection can also help manage symptoms.",
];

const INFO_ANXIETY_RESPONSES: &[&str] = &[
    "Anxiety is the body's natural response to stress, characterized by feelings of worry, nervousness, or fear. While occasional anxiety is normal, anxiety disorders involve excessive, persistent worry that interferes with daily activities.\n\nFrom a clinical perspective, there are several types of anxiety disorders including Generalized Anxiety Disorder (GAD), Panic Disorder, Social Anxiety Disorder, and specific phobias. These conditions involve physical symptoms like increased heart rate, rapid breathing, restlessness, trouble concentrating, and difficulty sleeping.\n\nTreatment approaches include cognitive-behavioral therapy (CBT), exposure therapy, medication (such as SSRIs, SNRIs, or benzodiazepines), and complementary practices like mindfulness meditation, deep breathing exercises, and regular physical activity.",
];

const INFO_BIPOLAR_RESPONSES: &[&str] = &[
    "Bipolar disorder is a mental health condition characterized by extreme mood swings that include emotional highs (mania or hypomania) and lows (depression). When experiencing a manic episode, people might feel euphoric, full of energy, or unusually irritable. During depressive episodes, they may feel sad, hopeless, and lose interest in most activities.\n\nBipolar I disorder involves manic episodes lasting at least 7 days or symptoms severe enough to require immediate hospital care, typically followed by depressive episodes. Bipolar II disorder involves a pattern of depressive episodes and hypomanic episodes (less severe than full mania).\n\nTreatment typically includes mood stabilizers (like lithium), atypical antipsychotics, and psychotherapy. Consistent treatment helps manage symptoms and reduce the frequency and severity of mood episodes.",
];

const INFO_SCHIZOPHRENIA_RESPONSES: &[&str] = &[
    "Schizophrenia is a complex, chronic mental health disorder characterized by distortions in thinking, perception, emotions, language, sense of self, and behavior. Symptoms typically emerge in late adolescence or early adulthood and fall into three categories:\n\n1. Positive symptoms: hallucinations, delusions, disorganized thinking, and movement disorders\n2. Negative symptoms: reduced emotional expression, decreased motivation, difficulty starting and sustaining activities\n3. Cognitive symptoms: problems with attention, memory, and executive functioning\n\nThe cause involves a combination of genetic, brain chemistry, and environmental factors. Treatment typically includes antipsychotic medications, psychosocial interventions, specialized therapy, and comprehensive support services.",
];

const INFO_ADHD_RESPONSES: &[&str] = &[
    "Attention-Deficit/Hyperactivity Disorder (ADHD) is a neurodevelopmental disorder affecting both children and adults. It's characterized by persistent patterns of inattention, hyperactivity, and impulsivity that interfere with functioning and development.\n\nThere are three presentations of ADHD: predominantly inattentive, predominantly hyperactive-impulsive, and combined. Symptoms must be present in multiple settings (home, school, work) to meet diagnostic criteria.\n\nThe neurobiological basis of ADHD involves differences in brain structure, function, and neurotransmitter activity, particularly in areas related to executive functioning. Treatment typically includes behavioral therapy, medication (stimulants like methylphenidate or non-stimulants like atomoxetine), educational interventions, and lifestyle adjustments.",
];

const INFO_STRESS_RESPONSES: &[&str] = &[
    "Stress is the body's physiological and psychological response to demands, challenges, or threats. When we perceive a stressor, the body activates the hypothalamic-pituitary-adrenal (HPA) axis, triggering a cascade of hormones including adrenaline and cortisol that prepare the body for 'fight or flight.'\n\nAcute stress can be beneficial, improving performance and focus. However, chronic stress can negatively impact physical and mental health, contributing to conditions like cardiovascular disease, digestive problems, immune suppression, sleep disturbances, and mood disorders.\n\nEffective stress management techniques include mindfulness meditation, deep breathing exercises, progressive muscle relaxation, regular physical activity, adequate sleep, social connection, time management, and cognitive restructuring to change stress-inducing thought patterns.",
];

const INFO_MINDFULNESS_RESPONSES: &[&str] = &[
    "Mindfulness is the psychological process of purposely bringing one's attention to experiences occurring in the present moment without judgment. It originated in Buddhist meditation practices but has been adapted for secular contexts in healthcare and psychology.\n\nNeurobiologically, regular mindfulness practice has been shown to promote structural and functional changes in brain regions associated with attention, emotional regulation, and self-awareness. Research demonstrates increased gray matter density in the hippocampus and reduced activity in the default mode network, which is associated with mind-wandering and rumination.\n\nClinical applications include Mindfulness-Based Stress Reduction (MBSR) and Mindfulness-Based Cognitive Therapy (MBCT), which have shown effectiveness for managing stress, anxiety, depression, chronic pain, and preventing relapse in depression. Core practices include focused attention on breath, body scan meditation, mindful movement, and informal mindfulness integrated into daily activities.",
];

const INFO_THERAPY_RESPONSES: &[&str] = &[
    "Psychotherapy (or therapy) is a collaborative treatment based on the relationship between an individual and a mental health professional. There are many evidence-based approaches:\n\n- Cognitive-Behavioral Therapy (CBT): Focuses on identifying and changing negative thought patterns and behaviors\n- Dialectical Behavior Therapy (DBT): Combines CBT with mindfulness, emphasizing emotional regulation and distress tolerance\n- Psychodynamic Therapy: Explores unconscious processes and past experiences that influence current behavior\n- Interpersonal Therapy: Focuses on improving communication patterns and relationships\n- Acceptance and Commitment Therapy (ACT): Emphasizes psychological flexibility through mindfulness and value-based action\n- Humanistic/Person-Centered Therapy: Focuses on personal growth and self-actualization\n\nTherapy can be delivered individually, in groups, for couples, or families, either in-person or via telehealth. Research consistently shows its effectiveness for various mental health conditions, often comparable to or enhancing the effects of medication.",
];

const INFO_TRAUMA_RESPONSES: &[&str] = &[
    "Trauma refers to the psychological and physiological response to deeply distressing events that overwhelm one's ability to cope. Traumatic experiences activate the body's stress response system, potentially leading to lasting effects on the brain and nervous system.\n\nPost-Traumatic Stress Disorder (PTSD) can develop following trauma exposure, characterized by intrusive memories, avoidance behaviors, negative alterations in cognition and mood, and changes in arousal and reactivity. Complex PTSD may develop from prolonged, repeated trauma, particularly during developmental periods.\n\nEvidence-based trauma treatments include:\n- Trauma-Focused Cognitive Behavioral Therapy (TF-CBT)\n- Eye Movement Desensitization and Reprocessing (EMDR)\n- Prolonged Exposure Therapy\n- Cognitive Processing Therapy\n- Somatic experiencing and body-based approaches\n\nThe concept of trauma-informed care emphasizes safety, trustworthiness, choice, collaboration, and empowerment when working with individuals who may have experienced trauma.",
];

const INFO_MEDICATION_RESPONSES: &[&str] = &[
    "Psychiatric medications are an important component of treatment for many mental health conditions. Major categories include:\n\n- Antidepressants: Treat depression, anxiety disorders, some chronic pain conditions. Types include SSRIs (e.g., fluoxetine, sertraline), SNRIs (e.g., venlafaxine, duloxetine), TCAs, and MAOIs.\n\n- Antipsychotics: Treat psychotic disorders like schizophrenia and psychotic symptoms in bipolar disorder. Divided into typical (first-generation) and atypical (second-generation) antipsychotics.\n\n- Mood Stabilizers: Treat bipolar disorder and prevent mood episodes. Include lithium, certain anticonvulsants (valproate, lamotrigine), and some atypical antipsychotics.\n\n- Anti-anxiety Medications: Include benzodiazepines (for short-term use), buspirone, and certain antidepressants.\n\n- Stimulants: Treat ADHD, improving attention, focus, and reducing hyperactivity.\n\nMedications work by affecting neurotransmitters and neural circuits in the brain. The effectiveness varies by individual, often requiring trial periods to find optimal treatment. Regular monitoring by healthcare providers is essential to manage potential side effects and ensure therapeutic benefit.",
];

/// Mapping from category to its non-empty, ordered candidate set.
pub struct ResponseBank {
    candidates: HashMap<Category, Vec<String>>,
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseBank {
    /// Builds the bank from the built-in response tables.
    pub fn builtin() -> Self {
        let tables: [(Category, &[&str]); 18] = [
            (Category::Greeting, GREETING_RESPONSES),
            (Category::Anxiety, ANXIETY_RESPONSES),
            (Category::Depression, DEPRESSION_RESPONSES),
            (Category::Stress, STRESS_RESPONSES),
            (Category::Positive, POSITIVE_RESPONSES),
            (Category::Gratitude, GRATITUDE_RESPONSES),
            (Category::Emergency, EMERGENCY_RESPONSES),
            (Category::Unsure, UNSURE_RESPONSES),
            (Category::InfoDepression, INFO_DEPRESSION_RESPONSES),
            (Category::InfoAnxiety, INFO_ANXIETY_RESPONSES),
            (Category::InfoBipolar, INFO_BIPOLAR_RESPONSES),
            (Category::InfoSchizophrenia, INFO_SCHIZOPHRENIA_RESPONSES),
            (Category::InfoAdhd, INFO_ADHD_RESPONSES),
            (Category::InfoStress, INFO_STRESS_RESPONSES),
            (Category::InfoMindfulness, INFO_MINDFULNESS_RESPONSES),
            (Category::InfoTherapy, INFO_THERAPY_RESPONSES),
            (Category::InfoTrauma, INFO_TRAUMA_RESPONSES),
            (Category::InfoMedication, INFO_MEDICATION_RESPONSES),
        ];

        let candidates = tables
            .into_iter()
            .map(|(category, texts)| {
                (category, texts.iter().map(|s| s.to_string()).collect())
            })
            .collect();

        Self { candidates }
    }

    /// Returns the registered candidate set for a category.
    pub fn candidates(&self, category: Category) -> &[String] {
        match self.candidates.get(&category) {
            Some(set) => set,
            None => &self.candidates[&Category::Unsure],
        }
    }

    /// Selects one candidate for the category, uniformly at random.
    ///
    /// Repeated identical input may yield different wording, never a
    /// different category. An empty or missing set cannot occur with the
    /// closed enumeration; should it ever happen, development builds assert
    /// and release builds log and serve the unsure fallback.
    pub fn select_reply(&self, category: Category) -> String {
        let set = match self.candidates.get(&category) {
            Some(set) if !set.is_empty() => set,
            _ => {
                debug_assert!(false, "no candidates registered for category {}", category);
                error!("No candidates registered for category {}, serving unsure fallback", category);
                &self.candidates[&Category::Unsure]
            }
        };

        set.choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| UNSURE_RESPONSES[0].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_candidates() {
        let bank = ResponseBank::builtin();

        for category in Category::ALL {
            assert!(
                !bank.candidates(category).is_empty(),
                "Expected candidates for {}",
                category
            );
        }
    }

    #[test]
    fn test_select_reply_stays_within_registered_set() {
        let bank = ResponseBank::builtin();

        for category in Category::ALL {
            let set = bank.candidates(category).to_vec();
            for _ in 0..100 {
                let reply = bank.select_reply(category);
                assert!(!reply.is_empty());
                assert!(
                    set.contains(&reply),
                    "Reply for {} escaped its candidate set",
                    category
                );
            }
        }
    }

    #[test]
    fn test_single_candidate_categories_are_deterministic() {
        let bank = ResponseBank::builtin();

        let only = bank.candidates(Category::InfoBipolar)[0].clone();
        for _ in 0..10 {
            assert_eq!(bank.select_reply(Category::InfoBipolar), only);
        }
    }

    #[test]
    fn test_unsure_set_exists() {
        let bank = ResponseBank::builtin();
        assert!(bank.candidates(Category::Unsure).len() >= 2);
    }
}
