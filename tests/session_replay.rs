//! Full deterministic sessions: every game replayed end to end with scripted
//! input and a fixed draw sequence, against a captured output sink.

use tidepool::config::{
    BubbleWrapConfig, DiceBattleConfig, HangmanConfig, TurtleRaceConfig, WetnessConfig,
};
use tidepool::games::{BubbleWrap, DiceBattle, Hangman, TurtleRace, WetnessQuiz};
use tidepool::{FixedRandom, ScriptedInput, SessionLoop, SessionReport};

async fn run_captured<G: tidepool::Game>(
    game: G,
    draws: Vec<i32>,
    lines: Vec<&str>,
) -> (SessionReport, String) {
    let mut out = Vec::new();
    let mut session = SessionLoop::new(
        game,
        FixedRandom::new(draws),
        ScriptedInput::new(lines),
        &mut out,
    );
    let report = session.run().await.expect("session should finish");
    (report, String::from_utf8(out).expect("output should be utf-8"))
}

#[tokio::test]
async fn bubble_wrap_session_pops_every_bubble_once() {
    let game = BubbleWrap::new(&BubbleWrapConfig { bubbles: 3 });
    let (report, output) = run_captured(game, vec![0], vec!["", "", ""]).await;

    assert_eq!(report.turns, 3);
    assert_eq!(
        report.message,
        "All bubbles popped. You win nothing, but feel better."
    );
    assert_eq!(
        output,
        "Bubble Wrap Simulator 🫧\n\
         Press Enter to pop...X O O\n\
         Press Enter to pop...X X O\n\
         Press Enter to pop...X X X\n"
    );
}

#[tokio::test]
async fn dice_battle_session_ends_on_the_killing_blow() {
    let game = DiceBattle::new(&DiceBattleConfig {
        starting_health: 2,
        ..DiceBattleConfig::default()
    });
    let (report, output) = run_captured(game, vec![5, 2], vec![""]).await;

    assert_eq!(report.turns, 1);
    assert_eq!(report.message, "You defeated the Kraken!");
    assert_eq!(
        output,
        "Welcome to Kraken Dice Battle\n\
         Press Enter to roll your dice!You rolled 5 | Kraken rolled 2\n\
         You slashed the Kraken!\n\
         You: 2 | Kraken: 0\n\
         \n"
    );
}

#[tokio::test]
async fn hangman_session_walks_from_blanks_to_the_win() {
    let config = HangmanConfig {
        words: vec!["kelp".to_string()],
        lives: 6,
    };
    let game = Hangman::new(&config, &FixedRandom::constant(0));
    let (report, output) = run_captured(game, vec![0], vec!["k", "z", "e", "l", "p"]).await;

    assert_eq!(report.turns, 5);
    assert_eq!(report.message, "You saved the reef! Word was: kelp");
    assert_eq!(
        output,
        "Welcome to Ocean Hangman\n\
         \n\
         Word: _ _ _ _\n\
         Guess a letter: Correct!\n\
         \n\
         Word: k _ _ _\n\
         Guess a letter: Wrong! Coral stress level rising... 5 lives left\n\
         \n\
         Word: k _ _ _\n\
         Guess a letter: Correct!\n\
         \n\
         Word: k e _ _\n\
         Guess a letter: Correct!\n\
         \n\
         Word: k e l _\n\
         Guess a letter: Correct!\n"
    );
}

#[tokio::test]
async fn turtle_race_session_ends_the_lap_the_line_is_crossed() {
    let game = TurtleRace::new(&TurtleRaceConfig {
        finish_line: 5,
        tick_ms: 0,
        ..TurtleRaceConfig::default()
    });
    let (report, output) = run_captured(game, vec![3, 2], vec![]).await;

    assert_eq!(report.turns, 2);
    assert_eq!(report.message, "Turtle 1 wins!");
    assert_eq!(
        output,
        "Welcome to Turtle Race! First to the seaweed wins\n\
         \n\
         Turtle 1: XXXXXXXXX\n\
         Turtle 2: >>>>>>\n\
         ------------------------------\n\
         Turtle 1: XXXXXXXXXXXXXXXXXX\n\
         Turtle 2: >>>>>>>>>>>>\n\
         ------------------------------\n"
    );
}

#[tokio::test]
async fn wetness_session_answers_until_exit() {
    let game = WetnessQuiz::new(&WetnessConfig::default());
    let (report, output) = run_captured(game, vec![0, 3], vec!["towel", "rock", "EXIT"]).await;

    assert_eq!(report.turns, 3);
    assert_eq!(report.message, "Stay dry out there.");
    assert_eq!(
        output,
        "Enter an object to check if it's wet (or type 'exit'): Towel → WET.\n\
         \n\
         Enter an object to check if it's wet (or type 'exit'): Rock → Depends... is it emotionally available?\n\
         \n\
         Enter an object to check if it's wet (or type 'exit'): "
    );
}

#[tokio::test]
async fn identical_scripts_reproduce_identical_sessions() {
    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let game = DiceBattle::new(&DiceBattleConfig::default());
        let (report, output) =
            run_captured(game, vec![6, 1, 2, 2, 1, 4], vec![""; 32]).await;
        transcripts.push((report.turns, report.message, output));
    }
    assert_eq!(transcripts[0], transcripts[1]);
}
