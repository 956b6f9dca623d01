use course_modules_core::{BlockPlugin, CourseModuleInfo};
use course_modules_tests::BlockWorld;
use cucumber::{then, when};

// ===== When Steps =====

#[when(expr = "a {word} named {string} is added to the course")]
async fn module_added(world: &mut BlockWorld, module_type: String, name: String) {
    let id = world.snapshot.modules.iter().map(|m| m.id).max().unwrap_or(0) + 1;
    world.snapshot.modules.push(CourseModuleInfo::new(
        id,
        id,
        module_type.clone(),
        name,
        format!("{module_type}s"),
        0,
    ));
}

#[when("the block is rendered")]
async fn block_rendered(world: &mut BlockWorld) {
    world.render_block();
}

#[when("the block is rendered again")]
async fn block_rendered_again(world: &mut BlockWorld) {
    world.render_block();
}

// ===== Then Steps =====

#[then(expr = "the block title is {string}")]
async fn block_title_is(world: &mut BlockWorld, title: String) {
    assert_eq!(world.block.title(), title);
}

#[then(expr = "the block role is {string}")]
async fn block_role_is(world: &mut BlockWorld, role: String) {
    assert_eq!(world.block.aria_role(), role);
}

#[then(regex = r"^the block shows (\d+) links?$")]
async fn block_shows_links(world: &mut BlockWorld, count: usize) {
    let content = world.content();
    assert_eq!(content.items.len(), count);
    assert!(content.items.iter().all(|item| item.starts_with("<a href=")));
}

#[then(expr = "block link {int} is {string}")]
async fn block_link_is(world: &mut BlockWorld, position: usize, markup: String) {
    assert_eq!(world.content().items[position - 1], markup);
}

#[then("the block has no icons and no footer")]
async fn block_has_no_icons_or_footer(world: &mut BlockWorld) {
    assert!(world.content().icons.is_empty());
    assert!(world.content().footer.is_empty());
}

#[then(expr = "the block is allowed on {string}")]
async fn block_allowed_on(world: &mut BlockWorld, page_format: String) {
    assert!(world.block.applicable_formats().is_applicable(&page_format));
}

#[then(expr = "the block is not allowed on {string}")]
async fn block_not_allowed_on(world: &mut BlockWorld, page_format: String) {
    assert!(!world.block.applicable_formats().is_applicable(&page_format));
}
