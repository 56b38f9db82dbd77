//! Randomised bound and monotonicity checks on the rubric.

mod support;

use docgrade::{
    WeightConfig,
    document::{Document, DocumentKind, Page},
    grade::{
        GrammarStrategy, LengthStrategy, PurposeStrategy, RubricScorer, RubricScores,
        ScoringPreset, ScoringProfile, UniformityStrategy,
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use support::StubChecker;

const VOCABULARY: &[&str] = &[
    "energy", "solar", "the", "grid", "and", "storage", "wind", "of", "turbine", "policy", "a",
    "cost", "is", "demand", "supply", "battery", "we", "market", "carbon", "emission",
];

fn random_text(rng: &mut StdRng) -> String {
    let mut text = String::new();
    for _ in 0..rng.gen_range(0..60) {
        for _ in 0..rng.gen_range(1..25) {
            text.push_str(VOCABULARY[rng.gen_range(0..VOCABULARY.len())]);
            text.push(' ');
        }
        text.push_str([".", "?", "!", "..."][rng.gen_range(0..4)]);
        text.push(if rng.gen_bool(0.2) { '\n' } else { ' ' });
    }
    text
}

fn random_pdf(rng: &mut StdRng) -> Document {
    let pages = (1..=rng.gen_range(0..9))
        .map(|n| {
            let lines: Vec<String> = (0..rng.gen_range(0..6))
                .map(|_| format!("{}line", " ".repeat(rng.gen_range(0..6))))
                .collect();
            Page::new(n, lines.join("\n"))
        })
        .collect();
    Document::new("Group1.pdf", DocumentKind::Pdf, pages)
}

fn within(score: f64, weight: f64) -> bool {
    (0.0..=weight).contains(&score)
}

#[test]
fn pure_categories_stay_within_their_weights() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let w = WeightConfig::default();
    for _ in 0..300 {
        let text = random_text(&mut rng);
        let doc = random_pdf(&mut rng);

        for u in [UniformityStrategy::classic(), UniformityStrategy::relaxed()] {
            assert!(within(u.score(&text, w.uniformity), w.uniformity));
        }
        for p in [PurposeStrategy::classic(), PurposeStrategy::relaxed()] {
            if let Ok(score) = p.score(&text, w.purpose) {
                assert!(within(score, w.purpose));
            }
        }
        for l in [LengthStrategy::classic(), LengthStrategy::relaxed()] {
            assert!(within(l.score(&doc, &text, w.length), w.length));
        }
        for g in [GrammarStrategy::classic(), GrammarStrategy::Linear] {
            let errors = rng.gen_range(0..200);
            let words = rng.gen_range(0..200);
            assert!(within(g.score_counts(errors, words, w.grammar), w.grammar));
        }
    }
}

#[tokio::test]
async fn rubric_totals_never_exceed_fifteen() {
    let mut rng = StdRng::seed_from_u64(42);
    let weights = WeightConfig::default();
    for preset in [ScoringPreset::Classic, ScoringPreset::Relaxed] {
        let profile = ScoringProfile::from(preset);
        for _ in 0..50 {
            let text = random_text(&mut rng);
            let doc = random_pdf(&mut rng);
            let checker = StubChecker::with_issues(rng.gen_range(0..20));
            let scores = RubricScorer::new(&profile, &weights, &checker).score(&doc, &text).await;
            for r in scores.results() {
                assert!(within(r.grade_value(), r.out_of_value()));
            }
            assert!(scores.total() <= 15);
        }
    }
}

#[test]
fn total_is_monotone_in_each_category() {
    let mut rng = StdRng::seed_from_u64(7);
    let w = WeightConfig::default();
    for _ in 0..500 {
        let base = [
            rng.gen_range(0.0..=w.uniformity),
            rng.gen_range(0.0..=w.purpose),
            rng.gen_range(0.0..=w.grammar),
            rng.gen_range(0.0..=w.length),
        ];
        let total = |v: [f64; 4]| RubricScores::from_values(&w, v[0], v[1], v[2], v[3]).total();
        let before = total(base);
        assert!(before <= 15);

        let i = rng.gen_range(0..4);
        let mut raised = base;
        raised[i] += rng.gen_range(0.0..3.0);
        assert!(total(raised) >= before);
    }
}
