use game::{Adjudicator, RandomPlayer, Seat};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tic_tac_toe::TicTacToe;

fn main() {
    let seed = std::env::args().nth(1).and_then(|x| x.parse().ok()).unwrap_or(0);
    let mut adjudicator = Adjudicator::new(
        TicTacToe::new(),
        RandomPlayer::new(Seat::First, SmallRng::seed_from_u64(seed)),
        RandomPlayer::new(Seat::Second, SmallRng::seed_from_u64(seed + 1)),
    );
    while adjudicator.conclusion().is_none() {
        adjudicator.progress_one_turn().expect("random players don't do i/o");
        println!("{}\n", adjudicator.game_state().board());
    }

    println!("Conclusion: {:?}", adjudicator.conclusion());
}
