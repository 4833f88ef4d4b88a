//! Instructional texts returned by the workflow tools.
//!
//! Every prompt that expects a follow-up ends with a `**NEXT ACTION**` line naming the tool;
//! the same tool is also reported in the response's `next_actions`.

fn next_action_line(next_tool: &str) -> String {
    format!("**NEXT ACTION**: Call {next_tool}.")
}

pub(super) fn title_thinker(query: &str, next_tool: &str) -> String {
    format!(
        "A paused reasoning step for generating or improving the card title.\n\n\
         **User Query**: {query}\n\n\
         {}",
        next_action_line(next_tool)
    )
}

pub(super) fn title_generation(naming_conventions: Option<&str>, next_tool: &str) -> String {
    let mut out = String::from(
        "You are generating a Zettelkasten card title.\n\n\
         **Important**: Generate ONLY the title. Do NOT include a timestamp: it is added when the \
         card is saved (format: YYYYMMDDHHMMSS - Title).\n\n\
         **Guidelines**:\n\
         - **Format**: one clear, descriptive phrase naming the core concept\n\
         - **Length**: typically 3-8 words\n\
         - **Atomic**: one card, one concept\n\
         - **Self-explanatory**: the title alone conveys the topic\n\
         - **Natural language**: spaces and normal capitalization, no snake_case\n\n\
         **Good titles**:\n\
         - Tool Driven Sequential Workflow\n\
         - Embedded Prompts Save Context Tokens\n\
         - Think Tools Force Deliberate Reasoning\n\n\
         **Poor titles**:\n\
         - Stuff (too vague)\n\
         - How To Build A Complete Server With Every Feature And Tool (too long)\n\
         - server_workflows (poor formatting)\n\n\
         Based on the topic identified in title_thinker, generate a concise, descriptive title \
         that captures the core concept.\n",
    );
    if let Some(conventions) = naming_conventions.map(str::trim).filter(|s| !s.is_empty()) {
        out.push_str("\n**Naming Conventions**:\n");
        out.push_str(conventions);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&next_action_line(next_tool));
    out
}

pub(super) fn content_thinker(title: &str, next_tool: &str) -> String {
    format!(
        "A paused reasoning step for writing the card content for the title: {title}\n\n{}",
        next_action_line(next_tool)
    )
}

pub(super) fn content_generation(title: &str, next_tool: &str) -> String {
    format!(
        "**Task**: write the body of a single Zettelkasten note that synthesizes the dialogue \
         about **{title}**.\n\n\
         **Rules**:\n\n\
         1. **Body only**: no title, tags, links or other metadata. The output is pasted into \
         the note file as is.\n\
         2. **Perspective**: write from the human participant's point of view. Use the way they \
         refer to themselves in the dialogue (\"I\", \"we\", a team name); default to \"I\". \
         Refer to the AI as an external party (\"the AI\", \"the model\").\n\
         3. **Narrative, not transcript**: weave the exchange into a flowing article that \
         follows how the inquiry progressed (\"The initial question was...\", \"The AI \
         clarified that...\"). Never use a `Human:` / `AI:` turn format.\n\
         4. **Atomic**: cover only the single idea named by **{title}**; related but distinct \
         ideas belong on their own cards.\n\
         5. **Inquiry path**: keep the logical order of questions, refinements and follow-ups \
         that led to the insight.\n\
         6. **Language**: write in the primary language of the dialogue; bilingual technical \
         terms are fine where they help.\n\
         7. **Clean Markdown**: paragraphs, bold and lists. Avoid headings unless essential.\n\n\
         {}",
        next_action_line(next_tool)
    )
}

pub(super) fn draft_complete(next_tool: &str) -> String {
    format!(
        "**Stage 1: Draft Generation Complete**\n\n\
         **Next Steps**: Present the title and content to the user and let them review it. \
         Once the user is satisfied, call {next_tool} with their feedback."
    )
}

pub(super) fn card_router(heading_tool: &str, template_tool: &str) -> String {
    format!(
        "Decide whether the content needs a heading.\n\n\
         Note: the heading is a detailed title inside the content body, not the card title \
         itself.\n\n\
         If it needs a heading, call `{heading_tool}` next; otherwise call `{template_tool}`."
    )
}

pub(super) fn heading_generation(next_tool: &str) -> String {
    format!(
        "You are generating a detailed content heading for a Zettelkasten card.\n\n\
         **Context**:\n\
         - The card already has a concise, filename-friendly title\n\
         - The heading appears at the top of the content and has no filename constraints\n\n\
         **Requirements**:\n\
         - **More detailed than the title**: expand abbreviations, add context\n\
         - **Specific**: name the core mechanism or concept the card covers\n\
         - **Length**: 40-100 characters\n\
         - **Natural language**: full words and punctuation; colons or parentheses are fine\n\n\
         **Examples**:\n\n\
         Title: `Tool Driven Sequential Workflow`\n\
         Heading: `Stateless Sequential Workflows Through Tool-Returned Process Instructions`\n\n\
         Title: `Think Tools Force Deliberate Reasoning`\n\
         Heading: `Think Tools: Using No-Op Tools as Checkpoints That Force Deliberate Reasoning`\n\n\
         Based on the card title and content, generate a detailed, descriptive heading.\n\n\
         {}",
        next_action_line(next_tool)
    )
}

pub(super) fn card_saved(path: &str, backup_created: bool, chars_written: usize) -> String {
    let backup = if backup_created {
        "\nBackup created for existing file."
    } else {
        ""
    };
    format!("Card saved: {path}{backup}\n\n{chars_written} characters written.")
}

pub(super) fn card_preview(preview: &str) -> String {
    format!("**Preview**:\n\n{preview}")
}
