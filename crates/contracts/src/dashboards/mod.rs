pub mod d500_salary;
