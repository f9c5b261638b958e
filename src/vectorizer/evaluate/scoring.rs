use num::Float;

use crate::vectorizer::TfIdfMatrix;

impl<N> TfIdfMatrix<N>
where
    N: Float + Into<f64>,
{
    /// Cosine similarity of the two rows in [0, 1]
    ///
    /// Rows are already L2-normalized, so this is their dot product up to
    /// rounding. A zero row scores 0.
    pub fn similarity(&self) -> f64 {
        let [a, b] = self.rows();
        let cos: f64 = a.cosine_similarity(b).into();
        // 丸め誤差で 1 をわずかに超えることがある
        cos.clamp(0.0, 1.0)
    }
}

/// Cosine similarity of the two rows as a percentage in [0, 100]
///
/// No rounding is applied; format at output time.
#[inline]
pub fn cosine_percentage<N>(matrix: &TfIdfMatrix<N>) -> f64
where
    N: Float + Into<f64>,
{
    matrix.similarity() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TfIdfVectorizer;

    fn score(a: &str, b: &str) -> f64 {
        let m = TfIdfVectorizer::<f64>::default().fit_transform([a, b]).unwrap();
        cosine_percentage(&m)
    }

    #[test]
    fn identical_documents_score_hundred() {
        let s = score("这是 一个 测试 文本", "这是 一个 测试 文本");
        assert!((s - 100.0).abs() <= 0.01);
        assert!(s <= 100.0);
    }

    #[test]
    fn disjoint_documents_score_zero() {
        assert_eq!(score("甲 乙", "丙 丁"), 0.0);
    }

    #[test]
    fn one_empty_document_scores_zero() {
        assert_eq!(score("", "甲 乙"), 0.0);
    }

    #[test]
    fn partial_overlap_matches_hand_computation() {
        // a: {x:1, y:1}  b: {x:1, z:1}
        // idf(x)=1, idf(y)=idf(z)=ln(1.5)+1=k
        // cos = 1 / (1 + k^2)
        let k = (1.5_f64).ln() + 1.0;
        let expected = 100.0 / (1.0 + k * k);
        assert!((score("x y", "x z") - expected).abs() < 1e-9);
    }

    #[test]
    fn order_of_rows_does_not_matter() {
        let a = "论文 查重 系统 的 设计";
        let b = "查重 系统 的 实现 方法";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn f32_matrix_scores_close_to_f64() {
        let m32 = TfIdfVectorizer::<f32>::default().fit_transform(["x y y", "x z"]).unwrap();
        let s64 = score("x y y", "x z");
        assert!((cosine_percentage(&m32) - s64).abs() < 1e-3);
    }
}
