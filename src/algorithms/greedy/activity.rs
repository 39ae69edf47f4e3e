use crate::algorithms::{
    Activity, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static ACTIVITY_SELECTION: Algorithm = Algorithm {
    name: "Activity Selection",
    category: Category::Greedy,
    input: InputKind::Activities,
    description: "Selects the maximum number of non-overlapping activities a single person \
                  can attend, always taking the one that finishes first.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(1)",
    },
    code: r#"fn activity_selection(activities: &mut [Activity]) -> Vec<u32> {
    activities.sort_by_key(|a| a.end);
    let Some(first) = activities.first() else {
        return Vec::new();
    };
    let mut selected = vec![first.id];
    let mut last_finish = first.end;

    for current in &activities[1..] {
        if current.start >= last_finish {
            selected.push(current.id);
            last_finish = current.end;
        }
    }
    selected
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let AlgorithmInput::Activities(intervals) = input else {
        return Err(ACTIVITY_SELECTION.mismatch(input));
    };
    let mut activities: Vec<Activity> = intervals.clone();
    let mut steps = vec![Step::variable("Initial unsorted activities")
        .with_line(1)
        .with_var("activities", &activities)
        .with_var("selectedIds", Vec::<u32>::new())];

    activities.sort_by_key(|a| a.end);
    steps.push(
        Step::variable("Sorted activities by finish time")
            .with_line(2)
            .with_var("activities", &activities)
            .with_var("selectedIds", Vec::<u32>::new()),
    );

    let Some(first) = activities.first().copied() else {
        steps.push(
            Step::highlight("No activities to select")
                .with_line(4)
                .with_var("activities", &activities)
                .with_var("selectedIds", Vec::<u32>::new()),
        );
        return Ok(AlgorithmResult::new(steps));
    };

    let mut selected = vec![first.id];
    let mut last_finish = first.end;
    steps.push(
        Step::highlight(format!(
            "Selected first activity {} (Ends at {})",
            first.id, first.end
        ))
        .with_line(6)
        .with_var("activities", &activities)
        .with_var("selectedIds", &selected)
        .with_var("currentId", first.id)
        .with_var("lastFinish", last_finish),
    );

    for current in &activities[1..] {
        steps.push(
            Step::comparison(format!(
                "Checking Activity {} (Start: {}) vs Last Finish ({})",
                current.id, current.start, last_finish
            ))
            .with_line(10)
            .with_var("activities", &activities)
            .with_var("selectedIds", &selected)
            .with_var("currentId", current.id)
            .with_var("lastFinish", last_finish),
        );

        if current.start >= last_finish {
            selected.push(current.id);
            steps.push(
                Step::highlight(format!(
                    "Start {} >= {}. Selected Activity {}",
                    current.start, last_finish, current.id
                ))
                .with_line(11)
                .with_var("activities", &activities)
                .with_var("selectedIds", &selected)
                .with_var("currentId", current.id)
                .with_var("lastFinish", current.end),
            );
            last_finish = current.end;
        } else {
            steps.push(
                Step::highlight(format!(
                    "Start {} < {}. Conflict! Skipping Activity {}",
                    current.start, last_finish, current.id
                ))
                .with_line(10)
                .with_var("activities", &activities)
                .with_var("selectedIds", &selected)
                .with_var("currentId", current.id)
                .with_var("lastFinish", last_finish)
                .with_var("conflict", true),
            );
        }
    }

    steps.push(
        Step::highlight(format!("Finished. Selected {} activities.", selected.len()))
            .with_line(15)
            .with_var("activities", &activities)
            .with_var("selectedIds", &selected),
    );

    Ok(AlgorithmResult::new(steps))
}
