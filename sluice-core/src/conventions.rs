use crate::QuerySplittingBehavior;
use std::collections::BTreeMap;

/// Model level configuration produced once at model build time.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    splitting_default: QuerySplittingBehavior,
}

impl ModelConfig {
    /// The splitting behavior queries fall back to when they make no explicit
    /// choice of their own.
    pub fn splitting_default(&self) -> QuerySplittingBehavior {
        self.splitting_default
    }
    pub fn set_splitting_default(&mut self, behavior: QuerySplittingBehavior) {
        self.splitting_default = behavior;
    }
}

/// Annotations a model source can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnotationKind {
    SplitQueriesByDefault,
    SingleQueryByDefault,
}

pub type ConventionAction = fn(&mut ModelConfig);

/// Explicit registration table mapping an annotation kind to the
/// configuration it applies, resolved at model build time.
///
/// Unknown annotations are ignored on apply so a model can carry annotations
/// addressed to other components.
pub struct ConventionRegistry {
    actions: BTreeMap<AnnotationKind, ConventionAction>,
}

impl ConventionRegistry {
    /// Registry preloaded with the built-in conventions.
    pub fn new() -> Self {
        let mut registry = Self {
            actions: BTreeMap::new(),
        };
        registry.register(AnnotationKind::SplitQueriesByDefault, |model| {
            model.set_splitting_default(QuerySplittingBehavior::SplitQuery)
        });
        registry.register(AnnotationKind::SingleQueryByDefault, |model| {
            model.set_splitting_default(QuerySplittingBehavior::SingleQuery)
        });
        registry
    }

    pub fn register(&mut self, kind: AnnotationKind, action: ConventionAction) -> &mut Self {
        self.actions.insert(kind, action);
        self
    }

    /// Apply the registered actions for `annotations`, in the order given.
    pub fn apply(
        &self,
        annotations: impl IntoIterator<Item = AnnotationKind>,
        model: &mut ModelConfig,
    ) {
        for kind in annotations {
            if let Some(action) = self.actions.get(&kind) {
                action(model);
            } else {
                log::warn!("No convention registered for the annotation {:?}", kind);
            }
        }
    }
}

impl Default for ConventionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
