use course_modules_core::{CourseModuleInfo, ModuleArchetype};
use course_modules_tests::{completion_cell, flag_cell, midnight_utc, BlockWorld};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

// ===== Given Steps =====

#[given(expr = "course {int} is viewed by user {int} on {string}")]
async fn course_viewed_by_user(world: &mut BlockWorld, course: u64, user: u64, wwwroot: String) {
    world.snapshot.course = course;
    world.user = user;
    world.config = world.config.clone().with_wwwroot(wwwroot);
}

#[given("the course has these modules:")]
async fn course_has_modules(world: &mut BlockWorld, step: &Step) {
    let table = step.table.as_ref().expect("Module table missing");
    let header = &table.rows[0];
    let column = |row: &Vec<String>, name: &str| -> String {
        let index = header
            .iter()
            .position(|h| h == name)
            .unwrap_or_else(|| panic!("Column '{name}' missing"));
        row[index].clone()
    };

    for row in table.rows.iter().skip(1) {
        let mut module = CourseModuleInfo::new(
            column(row, "id").parse().expect("id"),
            column(row, "instance").parse().expect("instance"),
            column(row, "type"),
            column(row, "name"),
            column(row, "plural"),
            midnight_utc(&column(row, "added")),
        )
        .with_completion(completion_cell(&column(row, "completion")));
        module.user_visible = flag_cell(&column(row, "visible"));
        module.has_view_link = flag_cell(&column(row, "view link"));

        world.snapshot.modules.push(module);
    }
}

#[given(expr = "user {int} sees {word} instance {int} as course module {int}")]
async fn user_sees_instance_as(
    world: &mut BlockWorld,
    user: u64,
    module_type: String,
    instance: u64,
    id: u64,
) {
    let course_record = world
        .snapshot
        .modules
        .iter()
        .find(|m| m.module_type == module_type && m.instance == instance)
        .cloned()
        .unwrap_or_else(|| panic!("No {module_type} instance {instance} in course"));

    let mut user_record = course_record;
    user_record.id = id;
    world.snapshot.users.entry(user).or_default().push(user_record);
}

#[given(expr = "module type {word} has the resource archetype")]
async fn module_type_is_resource(world: &mut BlockWorld, module_type: String) {
    world
        .snapshot
        .archetypes
        .insert(module_type, ModuleArchetype::Resource);
}

// ===== When Steps =====

#[when("the activity list is built")]
async fn activity_list_built(world: &mut BlockWorld) {
    world.build_list();
}

// ===== Then Steps =====

#[then(regex = r"^the list has (\d+) items?$")]
async fn list_has_items(world: &mut BlockWorld, count: usize) {
    assert_eq!(world.list().items.len(), count);
}

#[then(expr = "the item ids are {string}")]
async fn item_ids_are(world: &mut BlockWorld, ids: String) {
    let expected: Vec<u64> = ids
        .split(',')
        .map(|id| id.trim().parse().expect("id"))
        .collect();
    let actual: Vec<u64> = world.list().items.iter().map(|i| i.id).collect();
    assert_eq!(actual, expected);
}

#[then(expr = "item {int} text contains {string}")]
async fn item_text_contains(world: &mut BlockWorld, position: usize, text: String) {
    let item = &world.list().items[position - 1];
    assert!(
        item.text.contains(&text),
        "'{}' does not contain '{}'",
        item.text,
        text
    );
}

#[then(expr = "item {int} status is {string}")]
async fn item_status_is(world: &mut BlockWorld, position: usize, status: String) {
    assert_eq!(world.list().items[position - 1].status.text(), status);
}

#[then(expr = "item {int} links to {string}")]
async fn item_links_to(world: &mut BlockWorld, position: usize, suffix: String) {
    let url = &world.list().items[position - 1].url;
    assert!(url.ends_with(&suffix), "'{url}' does not end with '{suffix}'");
}

#[then("the type labels are:")]
async fn type_labels_are(world: &mut BlockWorld, step: &Step) {
    let table = step.table.as_ref().expect("Label table missing");
    let expected: Vec<(String, String)> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect();
    let actual: Vec<(String, String)> = world
        .list()
        .type_labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(actual, expected);
}
