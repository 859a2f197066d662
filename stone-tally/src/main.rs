use stone_tally::{adapter, Board, Catalogue, Move, Solver};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let moves = [[-2, -2, 1, 0], [-4, -4, 0, 0], [0, 0, -2, -2]];
    println!(
        "[6,4,2,4] with {moves:?} -> {}",
        adapter::solve_arrays([6, 4, 2, 4], &moves)?
    );

    let forced = Catalogue::new([Move::new([0, 0, -1, 0])]);
    for piles in [[6u32, 4, 2, 4], [4, 4, 2, 6]] {
        let board = Board::try_from(piles.as_slice())?;
        println!("{board} forced line -> {}", Solver::new(&forced).solve(&board)?);
    }

    Ok(())
}
