use flopnuts_engine::cards::Flop;
use flopnuts_engine::deck::deal_flop;
use flopnuts_engine::guess::validate_guess;
use flopnuts_engine::nuts::evaluate_nuts;
use flopnuts_engine::rng::Lcg;

fn sample_flops(seed: u64, n: usize) -> Vec<Flop> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| deal_flop(&mut rng)).collect()
}

#[test]
fn patterns_are_non_empty_sorted_and_unique() {
    for flop in sample_flops(2024, 40) {
        let nuts = evaluate_nuts(&flop);
        assert!(!nuts.patterns.is_empty(), "no nuts for {flop}");
        assert!(
            nuts.patterns.windows(2).all(|w| w[0] < w[1]),
            "{flop}: {:?} not strictly sorted",
            nuts.patterns
        );
        assert!(!nuts.explanation.is_empty());
    }
}

#[test]
fn every_pattern_and_its_bare_ranks_validate() {
    for flop in sample_flops(99, 25) {
        for p in evaluate_nuts(&flop).patterns {
            assert!(validate_guess(&flop, &p).correct, "{p} on {flop}");
            assert!(
                validate_guess(&flop, &p[..2]).correct,
                "{} on {flop}",
                &p[..2]
            );
        }
    }
}

#[test]
fn evaluation_is_repeatable() {
    let flop: Flop = "Jd 8d 3c".parse().unwrap();
    assert_eq!(evaluate_nuts(&flop), evaluate_nuts(&flop));
}

#[test]
fn reference_scenarios() {
    let cases = [
        ("Ah Kh Qh", vec!["JTh"], "royal flush"),
        ("7c 7d 2s", vec!["77"], "four of a kind"),
        ("9h Td Jc", vec!["KQo", "KQs"], "straight"),
        ("2h 3h 4h", vec!["65h"], "straight flush"),
        ("2c 3h 4s", vec!["65o", "65s"], "straight"),
        ("Ac Ad Ah", vec!["AKo", "AKs"], "four of a kind"),
    ];
    for (board, patterns, explanation) in cases {
        let nuts = evaluate_nuts(&board.parse().unwrap());
        assert_eq!(nuts.patterns, patterns, "{board}");
        assert!(nuts.explanation.contains(explanation), "{board}");
    }
}
