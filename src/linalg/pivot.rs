use crate::matrix::Matrix;
use crate::traits::LinalgScalar;

/// Partial pivoting for column `k`.
///
/// Scans rows `k..nrows` of column `k` for the entry of largest modulus.
/// The comparison is strict, so when several rows share the maximum the
/// first one encountered (lowest index) wins. If the winner is not row `k`,
/// the two rows are exchanged through the alignment-aware swap and the
/// matching permutation entries are swapped.
///
/// Returns `true` if a swap happened (parity feeds the determinant sign).
pub(crate) fn pivot<T: LinalgScalar>(a: &mut Matrix<T>, k: usize, perm: &mut [usize]) -> bool {
    let mut max_row = k;
    let mut max_val = a[(k, k)].modulus();
    for row in (k + 1)..a.nrows() {
        let val = a[(row, k)].modulus();
        if val > max_val {
            max_val = val;
            max_row = row;
        }
    }

    if max_row != k {
        perm.swap(k, max_row);
        a.swap_rows(k, max_row);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_largest_modulus_to_diagonal() {
        let mut a = Matrix::from_rows(3, 3, &[
            1.0_f64, 2.0, 3.0,
            -7.0, 5.0, 6.0,
            4.0, 8.0, 9.0,
        ]);
        let mut perm = [0, 1, 2];
        let swapped = pivot(&mut a, 0, &mut perm);
        assert!(swapped);
        assert_eq!(a[(0, 0)], -7.0);
        assert_eq!(perm, [1, 0, 2]);
    }

    #[test]
    fn no_op_when_diagonal_already_max() {
        let mut a = Matrix::from_rows(2, 2, &[5.0_f64, 1.0, 2.0, 3.0]);
        let mut perm = [0, 1];
        assert!(!pivot(&mut a, 0, &mut perm));
        assert_eq!(perm, [0, 1]);
        assert_eq!(a[(0, 0)], 5.0);
    }

    #[test]
    fn tie_break_keeps_first_row() {
        // |2| on the diagonal ties with |-2| below; the diagonal wins.
        let mut a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, -2.0, 3.0]);
        let mut perm = [0, 1];
        assert!(!pivot(&mut a, 0, &mut perm));
        assert_eq!(a.row(0), &[2.0, 1.0]);
    }

    #[test]
    fn scan_starts_at_diagonal() {
        // Row 0 has a huge entry in column 1, but pivoting column 1 only
        // looks at rows 1..n.
        let mut a = Matrix::from_rows(3, 3, &[
            1.0_f64, 100.0, 0.0,
            0.0, 2.0, 1.0,
            0.0, -3.0, 5.0,
        ]);
        let mut perm = [0, 1, 2];
        assert!(pivot(&mut a, 1, &mut perm));
        assert_eq!(a[(1, 1)], -3.0);
        assert_eq!(perm, [0, 2, 1]);
    }
}
