use sudokugen::generate;

fn main() {
    let puzzle = generate();
    println!("Solution:");
    println!("{:?}", puzzle.solution);
    println!("Puzzle with {} clues:", puzzle.clues.num_filled());
    println!("{:?}", puzzle.clues);
}
