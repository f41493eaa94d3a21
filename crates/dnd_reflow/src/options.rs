use serde::{Deserialize, Serialize};

use crate::drag::{ContainerId, DragInfo};
use crate::geometry::Orientation;
use crate::{Error, Result};

pub const DEFAULT_GROUP_NAME: &str = "@@dnd-reflow-default-group@@";

/// What happens to the dragged slot in its originating container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behaviour {
    #[default]
    Move,
    Copy,
}

impl std::str::FromStr for Behaviour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "move" => Ok(Behaviour::Move),
            "copy" => Ok(Behaviour::Copy),
            other => Err(Error::UnknownBehaviour {
                value: other.to_string(),
            }),
        }
    }
}

/// Per-container configuration.
///
/// When deserialized without `acceptGroups`, the container accepts exactly its
/// own group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawContainerOptions")]
pub struct ContainerOptions {
    pub group_name: String,
    pub behaviour: Behaviour,
    pub accept_groups: Vec<String>,
    /// Axis the host lays the container out along. The core itself measures
    /// through the [`Layout`](crate::Layout), which must agree with it; see
    /// [`MemoryLayout::for_options`](crate::MemoryLayout::for_options).
    pub orientation: Orientation,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContainerOptions {
    group_name: Option<String>,
    #[serde(default)]
    behaviour: Behaviour,
    accept_groups: Option<Vec<String>>,
    #[serde(default)]
    orientation: Orientation,
}

impl From<RawContainerOptions> for ContainerOptions {
    fn from(raw: RawContainerOptions) -> Self {
        let group_name = raw
            .group_name
            .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());
        let accept_groups = raw
            .accept_groups
            .unwrap_or_else(|| vec![group_name.clone()]);
        Self {
            group_name,
            behaviour: raw.behaviour,
            accept_groups,
            orientation: raw.orientation,
        }
    }
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            group_name: DEFAULT_GROUP_NAME.to_string(),
            behaviour: Behaviour::Move,
            accept_groups: vec![DEFAULT_GROUP_NAME.to_string()],
            orientation: Orientation::Vertical,
        }
    }
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Sets the group and, as deserialization does, accepts only that group.
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self.accept_groups = vec![self.group_name.clone()];
        self
    }

    pub fn behaviour(mut self, behaviour: Behaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn accept_groups<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        self.accept_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.group_name.is_empty() {
            return Err(Error::EmptyGroupName);
        }
        if let Some(index) = self.accept_groups.iter().position(String::is_empty) {
            return Err(Error::EmptyAcceptedGroup { index });
        }
        Ok(())
    }

    /// Whether a container with these options takes part in the gesture
    /// described by `info`.
    pub fn is_drag_relevant<S, P>(&self, container: ContainerId, info: &DragInfo<S, P>) -> bool {
        self.behaviour == Behaviour::Move
            && (info.container == container
                || info.group_name == self.group_name
                || self.accept_groups.contains(&info.group_name))
    }
}
