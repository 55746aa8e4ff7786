//! Per-category counts over a set of categorized exchanges

use crate::category::{Categorized, Category};
use std::collections::BTreeMap;

/// One line of a breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
    pub percentage: f32,
    pub color: &'static str,
}

/// How many exchanges fell into each category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    counts: BTreeMap<Category, usize>,
    total: usize,
}

impl CategoryBreakdown {
    /// Count the assigned categories of the given items
    pub fn from_exchanges<C: Categorized>(items: &[C]) -> Self {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|category| (category, 0)).collect();

        for item in items {
            *counts.entry(item.category()).or_insert(0) += 1;
        }

        Self {
            counts,
            total: items.len(),
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the total in percent, 0.0 for an empty breakdown
    pub fn percentage(&self, category: Category) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            (self.count(category) as f32 / self.total as f32) * 100.0
        }
    }

    /// Rows in category declaration order, including empty categories
    pub fn rows(&self) -> Vec<CategoryCount> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: self.count(category),
                percentage: self.percentage(category),
                color: category.color(),
            })
            .collect()
    }

    /// Most frequent category; ties go to the earlier category
    pub fn dominant(&self) -> Option<Category> {
        if self.total == 0 {
            return None;
        }

        Category::ALL
            .into_iter()
            .fold(None, |best: Option<Category>, category| match best {
                Some(current) if self.count(current) >= self.count(category) => Some(current),
                _ => Some(category),
            })
    }
}
