use std::cmp::Ordering;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// ドット積を計算するメソッド
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// # Arguments
    /// * `other` - 他のベクトル
    ///
    /// # Returns
    /// * `R` - ドット積の結果
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + Copy,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (mut i, mut j) = (0, 0);
        while i < self.nnz() && j < other.nnz() {
            match self.ind[i].cmp(&other.ind[j]) {
                Ordering::Equal => {
                    result = result + self.val[i].into() * other.val[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    /// Σ(a_i^2)
    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + Copy,
        N: Into<R>,
    {
        self.raw_iter().fold(R::zero(), |acc, (_, v)| {
            let v: R = v.into();
            acc + v * v
        })
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// ||a|| = sqrt(Σ(a_i^2))
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq::<N>().sqrt()
    }

    /// Scale in place so that the L2 norm is 1
    /// ゼロベクトルはそのまま
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm.is_zero() {
            return;
        }
        for v in self.val.iter_mut() {
            *v = *v / norm;
        }
    }

    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    ///
    /// Zero vectors have no direction; their similarity is 0.
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let denom = self.norm() * other.norm();
        if denom.is_zero() {
            return N::zero();
        }
        self.dot::<N>(other) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = ZeroSpVec::from(vec![1.0_f64, 0.0, 2.0, 3.0]);
        let b = ZeroSpVec::from(vec![0.0_f64, 5.0, 4.0, 1.0]);
        assert_eq!(a.dot::<f64>(&b), 11.0);
        assert_eq!(b.dot::<f64>(&a), 11.0);
    }

    #[test]
    fn f32_dot_widens_to_f64() {
        let a = ZeroSpVec::from(vec![0.5_f32, 0.25]);
        assert_eq!(a.dot::<f64>(&a), 0.3125);
    }

    #[test]
    fn normalize_gives_unit_norm() {
        let mut a = ZeroSpVec::from(vec![3.0_f64, 0.0, 4.0]);
        a.l2_normalize();
        assert!((a.norm() - 1.0).abs() < 1e-12);
        assert!((a.get(0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_stays_zero_and_scores_zero() {
        let mut zero = ZeroSpVec::<f64>::new(3);
        zero.l2_normalize();
        assert_eq!(zero.nnz(), 0);
        let a = ZeroSpVec::from(vec![1.0_f64, 1.0, 1.0]);
        assert_eq!(zero.cosine_similarity(&a), 0.0);
    }

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let a = ZeroSpVec::from(vec![1.0_f64, 2.0, 0.0]);
        let b = ZeroSpVec::from(vec![2.0_f64, 4.0, 0.0]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
    }
}
