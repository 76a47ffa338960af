use thiserror::Error;

use crate::core::catalog::Catalog;
use crate::models::Destination;

/// Errors that can occur while building the decision tree
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("decision-tree leaf names unknown destination: {0}")]
    UnknownDestination(String),
}

/// Index of a node in the tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A node in the guided-questionnaire tree
///
/// Questions hold their answer options as (label, child id) pairs; leaves
/// name a catalog destination. The name is the join key, resolved against
/// the catalog when the tree is built.
#[derive(Debug, Clone)]
pub enum DecisionNode {
    Question {
        prompt: String,
        options: Vec<(String, NodeId)>,
    },
    Leaf {
        destination: String,
    },
}

/// Fixed guided-questionnaire tree
///
/// Nodes live in an arena indexed by `NodeId`; parent questions reference
/// children by id, not by ownership. Built once at startup, depth 3, no
/// rebalancing or dynamic construction afterwards.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<DecisionNode>,
    root: NodeId,
}

impl DecisionTree {
    /// Build the standard questionnaire and validate its leaves against
    /// the catalog
    pub fn standard(catalog: &Catalog) -> Result<Self, TreeError> {
        let mut builder = TreeBuilder::new();

        let cartagena = builder.leaf("Cartagena");
        let bogota = builder.leaf("Bogotá");
        let san_andres = builder.leaf("San Andrés");
        let santa_marta = builder.leaf("Santa Marta");
        let eje_cafetero = builder.leaf("Eje Cafetero");
        let amazonas = builder.leaf("Amazonas");

        let culture = builder.question(
            "¿Prefieres arquitectura colonial o museos modernos?",
            vec![("Colonial", cartagena), ("Moderno", bogota)],
        );
        let adventure = builder.question(
            "¿Prefieres actividades en el mar o montaña?",
            vec![("Mar", san_andres), ("Montaña", santa_marta)],
        );
        let nature = builder.question(
            "¿Te gusta más el café o la selva?",
            vec![("Café", eje_cafetero), ("Selva", amazonas)],
        );

        let root = builder.question(
            "¿Qué tipo de experiencia buscas?",
            vec![
                ("Cultura", culture),
                ("Aventura", adventure),
                ("Naturaleza", nature),
            ],
        );

        let tree = builder.finish(root);
        tree.validate(catalog)?;
        Ok(tree)
    }

    /// The root question
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.0]
    }

    /// The question prompt at a node; leaves have none
    pub fn prompt(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            DecisionNode::Question { prompt, .. } => Some(prompt),
            DecisionNode::Leaf { .. } => None,
        }
    }

    /// Answer labels available at a node, in presentation order
    pub fn options(&self, id: NodeId) -> Vec<&str> {
        match self.node(id) {
            DecisionNode::Question { options, .. } => {
                options.iter().map(|(label, _)| label.as_str()).collect()
            }
            DecisionNode::Leaf { .. } => Vec::new(),
        }
    }

    /// Follow one answer from a node
    ///
    /// Answer labels match exactly; an answer that is not an option of the
    /// node (or any answer at a leaf) yields no result.
    pub fn navigate(&self, from: NodeId, answer: &str) -> Option<NodeId> {
        match self.node(from) {
            DecisionNode::Question { options, .. } => options
                .iter()
                .find(|(label, _)| label == answer)
                .map(|(_, child)| *child),
            DecisionNode::Leaf { .. } => None,
        }
    }

    /// Replay an answer sequence from the root
    pub fn walk<'a, I>(&self, answers: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self.root;
        for answer in answers {
            current = self.navigate(current, answer)?;
        }
        Some(current)
    }

    /// Resolve a leaf to its catalog record
    pub fn resolve<'a>(&self, id: NodeId, catalog: &'a Catalog) -> Option<&'a Destination> {
        match self.node(id) {
            DecisionNode::Leaf { destination } => catalog.find_by_name(destination),
            DecisionNode::Question { .. } => None,
        }
    }

    /// Check every leaf against the catalog
    fn validate(&self, catalog: &Catalog) -> Result<(), TreeError> {
        for node in &self.nodes {
            if let DecisionNode::Leaf { destination } = node {
                if catalog.find_by_name(destination).is_none() {
                    return Err(TreeError::UnknownDestination(destination.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Arena-backed tree builder
struct TreeBuilder {
    nodes: Vec<DecisionNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: DecisionNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn leaf(&mut self, destination: &str) -> NodeId {
        self.push(DecisionNode::Leaf {
            destination: destination.to_string(),
        })
    }

    fn question(&mut self, prompt: &str, options: Vec<(&str, NodeId)>) -> NodeId {
        self.push(DecisionNode::Question {
            prompt: prompt.to_string(),
            options: options
                .into_iter()
                .map(|(label, child)| (label.to_string(), child))
                .collect(),
        })
    }

    fn finish(self, root: NodeId) -> DecisionTree {
        DecisionTree {
            nodes: self.nodes,
            root,
        }
    }
}
