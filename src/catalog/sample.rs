use super::Tool;

const SAMPLE: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Drillable Composite Bridge Plug - Type A",
        "Downhole Tools",
        "Pressure rating: 70MPa | Temperature: 150°C | Material: high-strength alloy",
        "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=800&h=800&fit=crop",
        "https://modelviewer.dev/shared-assets/models/Astronaut.glb",
    ),
    (
        "Hydraulic Sand Jet Perforator",
        "Downhole Tools",
        "Jet pressure: 50-80MPa | Nozzle: 6-12mm | Length: 3.2m",
        "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?w=800&h=800&fit=crop",
        "https://modelviewer.dev/shared-assets/models/NeilArmstrong.glb",
    ),
    (
        "High-Pressure Plunger Pump",
        "Frac Pump Parts",
        "Power: 2500HP | Rate: 15BPM | Pressure: 140MPa",
        "https://images.unsplash.com/photo-1581092583537-20d51876f3e9?w=800&h=800&fit=crop",
        "https://modelviewer.dev/shared-assets/models/shishkebab.glb",
    ),
    (
        "Frac Fluid Blender",
        "Frac Pump Parts",
        "Capacity: 50m³ | Mixing accuracy: ±2% | Automated control",
        "https://images.unsplash.com/photo-1581092160562-40aa08e78837?w=800&h=800&fit=crop",
        "https://modelviewer.dev/shared-assets/models/RobotExpressive.glb",
    ),
    (
        "Smart Cluster Tool",
        "Downhole Tools",
        "Cluster stages: 8-12 | Activation: pressure/flow",
        "https://images.unsplash.com/photo-1581092160607-ee22621dd758?w=800&h=800&fit=crop",
        "https://modelviewer.dev/shared-assets/models/glTF-Sample-Models/2.0/DamagedHelmet/glTF-Binary/DamagedHelmet.glb",
    ),
];

/// The catalog a fresh session starts with.
///
/// Seeded tools keep short numeric ids so they are easy to type in the shell.
pub fn sample_tools() -> Vec<Tool> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, (name, group, description, poster, model))| Tool {
            id: (i + 1).to_string(),
            name: name.to_string(),
            group: group.to_string(),
            description: description.to_string(),
            poster_url: poster.to_string(),
            model_url: model.to_string(),
        })
        .collect()
}
