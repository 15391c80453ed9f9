use risk_core::risk::{classify, RiskLevel};

// SHA-256 derived scores for the shipped channel/image pairs. These are the
// values the dashboard displays out of the box; a change here means the
// classifier's hash or reduction changed.
#[test]
fn shipped_channel_inputs_classify_as_pinned() {
    let cases = [
        ("case1.png-CCTV1", 82, RiskLevel::High),
        ("case2.png-CCTV2", 90, RiskLevel::High),
        ("case3.png-CCTV3", 60, RiskLevel::Medium),
        ("case4.png-CCTV4", 59, RiskLevel::Low),
    ];
    for (input, score, level) in cases {
        let result = classify(input);
        assert_eq!(result.score, score, "input {input:?}");
        assert_eq!(result.level, level, "input {input:?}");
    }
}

#[test]
fn channel_suffix_alone_changes_the_input_space() {
    let a = classify("x.png-CCTV1");
    let b = classify("x.png-CCTV2");
    assert_eq!(a.score, 49);
    assert_eq!(b.score, 74);
}
