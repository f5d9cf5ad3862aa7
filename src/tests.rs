#[cfg(test)]
mod unit_tests {
    use crate::goal::ShantenAnalysis;
    use crate::parser::parse_hand;
    use crate::shanten::{analyze_shanten, analyze_shanten_with_option};
    use crate::types::{TileCounts, INFINITY_SHANTEN, TILE_MAX};

    // (name, hand, shanten, goal count)
    const CASES: &[(&str, &str, i32, usize)] = &[
        ("ready", "1m 2m 3m 7m 8m 9m 2s 3s 4s S S S W", 0, 1),
        ("one away", "1m 2m 3m 7m 8m 9m 2s 3s S S S W N", 1, 4),
        ("empty", "", 1, 34),
        ("thirteen orphans", "1m 9m 1p 9p 1s 9s E S W N P F C", 8, 27675),
        ("double pair wait", "1m 2m 3m 4p 5pr 6p 7s 8s 9s E E S S", 0, 2),
        ("complete", "1m 2m 3m 4p 5pr 6p 7s 8s 9s E E S S S", -1, 1),
        ("after a call", "1m 2m 3m 4p 5pr 6p 7s 8s 9s E", 0, 1),
        ("without pair", "1m 2m 3m 8m 9m 4p 5p 6p 1s 2s 7s 8s 9s E", 1, 6),
        ("too many partial melds", "1m 2m 3m 8m 9m 4p 5p 6p 1s 2s 8s 9s E E", 1, 3),
        ("not enough partial melds", "1m 3m 3m 3m 4m 5m 5m 6m 8m S W F C C", 2, 1),
        ("two melds without a pair", "2p 3p 4p 5s 6s 7s", 1, 38),
        ("triplet then sequence", "2p 2p 2p 3p 4p 5p E S W N P F C", 4, 105),
        ("sequence around isolated", "2p 3p 4p 4p 4p 5p 6p E S W N P F", 4, 285),
        ("pair triplet sequence", "1p 1p 2p 2p 2p 3p 4p 5p E S W N P", 3, 30),
        ("pair sequence sequence pair", "2p 2p 3p 4p 5p 5p 6p 7p 8p 8p E S W", 2, 9),
        ("fifth tile wait 1", "1m 1m 1m 1m 1p 2p 3p 1s 1s 2s 2s 3s 3s", 1, 40),
        ("fifth tile wait 2", "1m 1m 1m 1m 2m 3m 4m 4m 4m 4m 1p 1p 1p 1p", 1, 82),
        ("fifth tile wait 3", "E E E E S S S S W W W N N N", 1, 30),
        ("two isolated quads 1", "1m 1m 1m 1m 2m 4m 7m 7m 7m 7m", 1, 1),
        ("two isolated quads 2", "1m 1m 1m 1m 2m 4m 7m 7m 7m 7m E E E S", 1, 3),
        ("two isolated quads 3", "1m 1m 1m 1m 4m 4m 4m 4m", 1, 40),
        ("two isolated quads 4", "1m 1m 1m 1m 2m 4m E E E E", 1, 1),
        ("two isolated quads 5", "1m 1m 1m 1m 4m 4m 4m 4m 7m 8m", 2, 89),
        ("three isolated quads", "1m 1m 1m 1m 2m 4m 7m 7m 7m 7m E E E E", 1, 1),
        ("honor quad 1", "E E E E", 1, 33),
        ("honor quad 2", "1m 2m 3m E E E E", 1, 34),
        ("honor quad 3", "E E E E S S S S", 1, 32),
        ("honor quad 4", "1m 2m 3m 1p 1p E E E E S S S S", 2, 37),
        (
            "several decompositions",
            "1m 1m 1m 2m 2m 2m 3m 3m 3m 7p 8p 9p 9p 9p",
            -1,
            2,
        ),
    ];

    fn hand(text: &str) -> TileCounts {
        parse_hand(text).unwrap()
    }

    fn assert_goal_invariants(name: &str, hand: &TileCounts, analysis: &ShantenAnalysis) {
        let num_tiles: i32 = hand.iter().sum();
        let num_blocks = (num_tiles / 3).min(4) as usize + 1;
        for goal in &analysis.goals {
            assert_eq!(goal.blocks.len(), num_blocks, "{}: block count", name);
            for k in 0..TILE_MAX {
                assert_eq!(
                    goal.count_vector[k],
                    hand[k] + goal.required_vector[k] - goal.throwable_vector[k],
                    "{}: reconciliation at kind {}",
                    name,
                    k
                );
                assert_eq!(
                    goal.required_vector[k].min(goal.throwable_vector[k]),
                    0,
                    "{}: required and throwable overlap at kind {}",
                    name,
                    k
                );
            }
        }
    }

    #[test]
    fn test_scenarios() {
        for &(name, text, want_shanten, want_goals) in CASES {
            let counts = hand(text);
            let analysis = analyze_shanten(&counts).unwrap();
            assert_eq!(analysis.shanten, want_shanten, "{}: shanten", name);
            assert_eq!(analysis.goals.len(), want_goals, "{}: goal count", name);
            assert_goal_invariants(name, &counts, &analysis);
        }
    }

    #[test]
    fn test_scenarios_with_bounds() {
        for &(name, text, want_shanten, want_goals) in CASES {
            let counts = hand(text);
            for bound in -1..=8 {
                let analysis = analyze_shanten_with_option(&counts, 0, bound).unwrap();
                if want_shanten > bound {
                    assert_eq!(analysis.shanten, INFINITY_SHANTEN, "{} bound {}", name, bound);
                    assert!(analysis.goals.is_empty(), "{} bound {}", name, bound);
                } else {
                    assert_eq!(analysis.shanten, want_shanten, "{} bound {}", name, bound);
                    assert_eq!(analysis.goals.len(), want_goals, "{} bound {}", name, bound);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let counts = hand("1m 2m 3m 8m 9m 4p 5p 6p 1s 2s 8s 9s E E");
        let first = analyze_shanten_with_option(&counts, 1, 8).unwrap();
        let second = analyze_shanten_with_option(&counts, 1, 8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_slack_monotonicity() {
        let hands = [
            "1m 2m 3m 7m 8m 9m 2s 3s S S S W N",
            "2p 2p 3p 4p 5p 5p 6p 7p 8p 8p E S W",
            "1m 2m 3m 4p 5pr 6p 7s 8s 9s E E S S",
            "2p 3p 4p 5s 6s 7s",
        ];
        for text in hands {
            let counts = hand(text);
            let mut previous = 0;
            for slack in 0..=2 {
                let analysis = analyze_shanten_with_option(&counts, slack, 8).unwrap();
                let strict = analyze_shanten(&counts).unwrap();
                assert_eq!(analysis.shanten, strict.shanten, "{} slack {}", text, slack);
                assert!(analysis.goals.len() >= previous, "{} slack {}", text, slack);
                assert!(analysis
                    .goals
                    .iter()
                    .all(|g| g.shanten <= strict.shanten + slack));
                assert_goal_invariants(text, &counts, &analysis);
                previous = analysis.goals.len();
            }
        }
    }

    #[test]
    fn test_slack_keeps_strict_goals() {
        let counts = hand("1m 2m 3m 7m 8m 9m 2s 3s S S S W N");
        let strict = analyze_shanten(&counts).unwrap();
        let wide = analyze_shanten_with_option(&counts, 1, 8).unwrap();
        for goal in &strict.goals {
            assert!(wide.goals.contains(goal));
        }
    }

    #[test]
    fn test_empty_hand_pairs() {
        let analysis = analyze_shanten(&[0; TILE_MAX]).unwrap();
        for (kind, goal) in analysis.goals.iter().enumerate() {
            assert_eq!(goal.blocks, vec![crate::types::Block::Pair(kind as u8)]);
            assert_eq!(goal.required_vector[kind], 2);
        }
    }

    #[test]
    fn test_hands_over_fourteen_tiles_keep_four_melds() {
        let counts = hand("1m 2m 3m 4p 5p 6p 7s 8s 9s E E S S S W W W");
        let analysis = analyze_shanten(&counts).unwrap();
        assert_eq!(analysis.shanten, -1);
        // Any four of the five melds, with E, S or W as the pair.
        assert_eq!(analysis.goals.len(), 7);
        assert!(analysis.goals.iter().all(|g| g.blocks.len() == 5));
        assert_goal_invariants("seventeen tiles", &counts, &analysis);
    }

    #[test]
    fn test_negative_slack_is_zero() {
        let empty = [0; TILE_MAX];
        let analysis = analyze_shanten_with_option(&empty, -5, 8).unwrap();
        assert_eq!(analysis, analyze_shanten(&empty).unwrap());
        assert_eq!(analysis.shanten, 1);
        assert_eq!(analysis.goals.len(), 34);
    }

    #[test]
    fn test_extreme_bounds() {
        let counts = hand("1m 2m 3m 4p 5pr 6p 7s 8s 9s E E S S S");
        let analysis = analyze_shanten_with_option(&counts, 0, i32::MAX).unwrap();
        assert_eq!(analysis, analyze_shanten(&counts).unwrap());

        let analysis = analyze_shanten_with_option(&counts, i32::MAX, i32::MIN).unwrap();
        assert_eq!(analysis, ShantenAnalysis::infeasible());
    }

    #[test]
    fn test_python_module_matches_lib_name() {
        let manifest = include_str!("../Cargo.toml");
        let bindings = include_str!("python.rs");
        assert!(manifest.contains("name = \"shanten_engine\""));
        assert!(bindings.contains("fn shanten_engine(_py"));
    }

    #[test]
    fn test_invalid_hands() {
        let mut counts = [0; TILE_MAX];
        counts[0] = 5;
        assert!(analyze_shanten(&counts).is_err());
        assert_eq!(
            analyze_shanten(&counts).unwrap_or_default(),
            ShantenAnalysis::infeasible()
        );

        let mut counts = [0; TILE_MAX];
        counts[10] = -1;
        assert!(analyze_shanten_with_option(&counts, 1, 8).is_err());
    }
}
