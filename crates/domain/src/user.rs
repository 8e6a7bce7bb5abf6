//! # ユーザー
//!
//! 求人に応募する従業員（アルバイト）の識別子。

define_opaque_id! {
    /// ユーザー ID
    pub struct UserId("ユーザー ID");
}
