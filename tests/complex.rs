//! Complex-valued systems always take the scalar elimination core; these
//! tests pin down that the factorization and solves still hold.

#![cfg(feature = "complex")]

use doolittle::{solve, Complex, LuDecomposition, Matrix};

type C64 = Complex<f64>;

fn c(re: f64, im: f64) -> C64 {
    Complex::new(re, im)
}

#[test]
fn complex_solve_residual() {
    let a = Matrix::from_rows(3, 3, &[
        c(2.0, 1.0), c(-1.0, 0.0), c(0.0, 3.0),
        c(1.0, -1.0), c(3.0, 0.0), c(1.0, 0.0),
        c(0.0, 2.0), c(1.0, 1.0), c(4.0, -1.0),
    ]);
    let b = vec![c(1.0, 0.0), c(0.0, 1.0), c(2.0, -1.0)];

    let x = solve(&a, &b).unwrap();
    let back = a.mul_vec(&x);
    for i in 0..3 {
        assert!((back[i] - b[i]).norm() < 1e-12, "residual[{i}] = {}", back[i] - b[i]);
    }
}

#[test]
fn complex_pivoting_uses_modulus() {
    // First pivot candidate has a larger modulus in row 1 even though the
    // real parts would order the other way.
    let a = Matrix::from_rows(2, 2, &[
        c(1.0, 0.0), c(0.0, 0.0),
        c(0.0, 5.0), c(1.0, 0.0),
    ]);
    let lu = LuDecomposition::new(&a).unwrap();
    assert_eq!(lu.permutation(), &[1, 0]);
}

#[test]
fn complex_determinant() {
    // det = (1+i)(2-i) - (3i)(1) = 3 + i - 3i = 3 - 2i
    let a = Matrix::from_rows(2, 2, &[
        c(1.0, 1.0), c(0.0, 3.0),
        c(1.0, 0.0), c(2.0, -1.0),
    ]);
    let d = a.lu().unwrap().det();
    assert!((d - c(3.0, -2.0)).norm() < 1e-12, "det = {d}");
}

#[test]
fn complex_inverse_round_trip() {
    let a = Matrix::from_rows(2, 2, &[
        c(1.0, 1.0), c(0.0, 3.0),
        c(1.0, 0.0), c(2.0, -1.0),
    ]);
    let ai = a.inverse().unwrap();
    let id = &a * &ai;
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
            assert!((id[(i, j)] - expected).norm() < 1e-12, "id[({i},{j})] = {}", id[(i, j)]);
        }
    }
}
