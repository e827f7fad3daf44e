/// R-tree错误类型
///
/// 插入和搜索本身不会失败，错误只出现在边界上：
/// 构造树、构造矩形、加载配置以及结构校验。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RTreeError {
    #[error("Invalid configuration: max_children must be at least 2, got {max_children}")]
    InvalidConfiguration { max_children: usize },
    #[error("Invalid rectangle ({min_x}, {min_y}, {max_x}, {max_y}): min must not exceed max")]
    InvalidRectangle {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Tree invariant violated: {0}")]
    Corrupted(String),
}

pub type Result<T> = std::result::Result<T, RTreeError>;
