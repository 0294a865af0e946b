mod board;
mod solver;
mod utils;
mod generator;

pub use board::Board;
pub use solver::{count_solutions, fill, SolutionCount, SolverError};
pub use generator::{
    generate, generate_many, generate_solution, generate_solution_with, generate_with, reduce,
    reduce_with, Puzzle,
};
