use super::error::{RTreeError, Result};
use derive_more::Display;
use serde::Serialize;

/// 矩形边界框 - 用于表示R-tree中的最小边界矩形(MBR)
///
/// 构造后不可变，保证 `min_x <= max_x` 且 `min_y <= max_y`。
#[derive(Debug, Display, Clone, Copy, PartialEq, Serialize)]
#[display(fmt = "({}, {}, {}, {})", min_x, min_y, max_x, max_y)]
pub struct Rectangle {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rectangle {
    /// 创建新的矩形，坐标颠倒、为 NaN 或无穷大时返回 `InvalidRectangle`
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x > max_x || min_y > max_y {
            return Err(RTreeError::InvalidRectangle {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Rectangle {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// 创建一个点矩形
    pub fn from_point(x: f64, y: f64) -> Result<Self> {
        Self::new(x, y, x, y)
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// 计算矩形面积
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// 计算两个矩形的并集MBR
    pub fn merge(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// 判断两个矩形是否相交（边界接触也算相交）
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// 判断当前矩形是否包含另一个矩形
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// 判断当前矩形是否包含一个点
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// 计算扩大到包含另一个矩形所需的面积增量
    pub fn enlargement(&self, other: &Rectangle) -> f64 {
        self.merge(other).area() - self.area()
    }

    /// 两个矩形之间的平方欧氏距离，相交时为0
    ///
    /// 仅用于节点分裂时挑选相距最远的两个种子。
    pub fn distance(&self, other: &Rectangle) -> f64 {
        let dx = 0f64.max((self.min_x - other.max_x).max(other.min_x - self.max_x));
        let dy = 0f64.max((self.min_y - other.max_y).max(other.min_y - self.max_y));
        dx * dx + dy * dy
    }

    /// 计算矩形中心点
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        ]
    }
}
