//! Card composition for pipeline events.
//!
//! BUILD and DEPLOY cards share one layout; they differ only in the verbs used
//! in the title and in the DEPLOY-only image line. Each locale supplies its own
//! [`Vocabulary`].

use std::collections::BTreeMap;

use crate::card::{Element, Header, HeaderTemplate, Locale, MessageCard};
use crate::event::{EventKind, PipelineEvent};

/// Title verbs for one event kind.
#[derive(Debug, Clone, Copy)]
pub struct Verbs {
    pub success: &'static str,
    pub failure: &'static str,
}

/// Per-locale labels used when rendering a card.
///
/// Line labels include their trailing separator so they can be written
/// directly in front of the value.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub build: Verbs,
    pub deploy: Verbs,
    pub failed_steps: &'static str,
    pub project: &'static str,
    pub tag: &'static str,
    pub branch: &'static str,
    pub author: &'static str,
    pub commit: &'static str,
    pub image: &'static str,
    pub footer: &'static str,
}

pub const ZH_CN: Vocabulary = Vocabulary {
    build: Verbs {
        success: "构建成功",
        failure: "构建失败",
    },
    deploy: Verbs {
        success: "部署成功",
        failure: "部署失败",
    },
    failed_steps: "**:SLAP: 失败：** ",
    project: "**:GeneralBusinessTrip: 项目：** ",
    tag: "**:Pin: 标签：** ",
    branch: "**:StatusReading: 分支：** ",
    author: "**:EMBARRASSED: 提交：** ",
    commit: "**:Status_PrivateMessage: 信息：** ",
    image: "**:CheckMark: 镜像：** ",
    footer: "以上信息由 drone 飞书机器人自动发出",
};

pub const EN_US: Vocabulary = Vocabulary {
    build: Verbs {
        success: "Build Successfully",
        failure: "Build Failed",
    },
    deploy: Verbs {
        success: "Deploy Successfully",
        failure: "Deploy Failed",
    },
    failed_steps: "**:SLAP: FAIL: ** ",
    project: "**:GeneralBusinessTrip: PROJ: ** ",
    tag: "**:Pin: TAGS: ** ",
    branch: "**:StatusReading: BCHS: ** ",
    author: "**:EMBARRASSED: CMMT: ** ",
    commit: "**:Status_PrivateMessage: NOTE: ** ",
    // The full-width colon matches what deployed bots already render.
    image: "**:CheckMark: IMAGE：** ",
    footer: "This msg is sent by drone lark robot",
};

impl Vocabulary {
    pub fn for_locale(locale: Locale) -> &'static Vocabulary {
        match locale {
            Locale::ZhCn => &ZH_CN,
            Locale::EnUs => &EN_US,
        }
    }

    fn verbs(&self, kind: EventKind) -> Verbs {
        match kind {
            EventKind::Build => self.build,
            EventKind::Deploy => self.deploy,
        }
    }
}

/// Compose the interactive card for a pipeline event.
pub fn compose(event: &PipelineEvent) -> MessageCard {
    let success = event.build.is_success();

    let mut titles = BTreeMap::new();
    let mut i18n_elements = BTreeMap::new();

    for locale in Locale::ALL {
        let vocab = Vocabulary::for_locale(locale);
        titles.insert(locale, render_title(event, vocab, success));
        i18n_elements.insert(
            locale,
            vec![
                Element::markdown(render_body(event, vocab)),
                Element::note(vec![Element::lark_md(render_footer(event, vocab))]),
            ],
        );
    }

    MessageCard {
        i18n_elements,
        header: Header {
            template: if success {
                HeaderTemplate::Green
            } else {
                HeaderTemplate::Red
            },
            title: Element::PlainText { i18n: titles },
        },
    }
}

fn render_title(event: &PipelineEvent, vocab: &Vocabulary, success: bool) -> String {
    let verbs = vocab.verbs(event.kind);
    let (mark, verb) = if success {
        ("✅", verbs.success)
    } else {
        ("❌", verbs.failure)
    };
    format!("{} {} {} #{}", mark, event.repo.name, verb, event.build.number)
}

fn render_body(event: &PipelineEvent, vocab: &Vocabulary) -> String {
    let mut out = String::new();

    if !event.build.failed_steps.is_empty() {
        out.push_str(&format!(
            "{}<font color='red'>{}</font>\n",
            vocab.failed_steps, event.build.failed_steps
        ));
    }

    out.push_str(&format!(
        "{}[{}]({})\n",
        vocab.project, event.repo.name, event.repo.link
    ));

    let commit = &event.commit;
    if !commit.tag.is_empty() {
        out.push_str(&format!(
            "{}<text_tag color='indigo'>{}</text_tag>\n",
            vocab.tag, commit.tag
        ));
    } else if !commit.branch.is_empty() {
        out.push_str(&format!(
            "{}<text_tag color='blue'>{}</text_tag>\n",
            vocab.branch, commit.branch
        ));
    }

    if let Some(author) = commit.author_display() {
        if commit.author_email.is_empty() {
            out.push_str(&format!("{}{}\n", vocab.author, author));
        } else {
            out.push_str(&format!(
                "{}[{}](mailto:{})\n",
                vocab.author, author, commit.author_email
            ));
        }
    }

    if !commit.sha.is_empty() {
        out.push_str(&format!(
            "{}[#{}]({})\n",
            vocab.commit,
            commit.short_sha(8),
            commit.link
        ));
    }

    if event.kind == EventKind::Deploy {
        if let Some(image) = event.image_ref() {
            out.push_str(&format!("{}** {}**\n", vocab.image, image));
        }
    }

    out.push_str(" ---\n");
    out.push_str(&commit.message);
    out
}

fn render_footer(event: &PipelineEvent, vocab: &Vocabulary) -> String {
    format!(":Loudspeaker: [{}]({})", vocab.footer, event.build.link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{BuildInfo, CommitInfo, RepoInfo};

    const SHA: &str = "abcdef0123456789abcdef0123456789abcdef";

    fn make_event(kind: EventKind, status: &str) -> PipelineEvent {
        PipelineEvent {
            kind,
            repo: RepoInfo {
                name: "api".to_string(),
                link: "https://git.example.com/team/api".to_string(),
            },
            build: BuildInfo {
                number: "42".to_string(),
                status: status.to_string(),
                link: "https://drone.example.com/team/api/42".to_string(),
                failed_steps: String::new(),
            },
            commit: CommitInfo {
                message: "fix: handle empty input".to_string(),
                ..Default::default()
            },
            docker_group: "registry.example.com/team".to_string(),
        }
    }

    fn en(card: &MessageCard) -> &str {
        card.markdown(Locale::EnUs).unwrap()
    }

    fn zh(card: &MessageCard) -> &str {
        card.markdown(Locale::ZhCn).unwrap()
    }

    #[test]
    fn test_build_success_title() {
        let card = compose(&make_event(EventKind::Build, "success"));
        assert_eq!(card.header.template, HeaderTemplate::Green);
        assert_eq!(
            card.header.title_text(Locale::EnUs),
            Some("✅ api Build Successfully #42")
        );
        assert_eq!(
            card.header.title_text(Locale::ZhCn),
            Some("✅ api 构建成功 #42")
        );
    }

    #[test]
    fn test_build_failure_title() {
        for status in ["failure", "error", "killed", ""] {
            let card = compose(&make_event(EventKind::Build, status));
            assert_eq!(card.header.template, HeaderTemplate::Red);
            let title = card.header.title_text(Locale::EnUs).unwrap();
            assert!(title.contains("Build Failed"), "status {:?}", status);
            assert!(title.contains('❌'));
        }
    }

    #[test]
    fn test_deploy_titles() {
        let card = compose(&make_event(EventKind::Deploy, "success"));
        assert_eq!(
            card.header.title_text(Locale::EnUs),
            Some("✅ api Deploy Successfully #42")
        );

        let card = compose(&make_event(EventKind::Deploy, "failure"));
        assert_eq!(
            card.header.title_text(Locale::ZhCn),
            Some("❌ api 部署失败 #42")
        );
    }

    #[test]
    fn test_minimal_body() {
        let card = compose(&make_event(EventKind::Build, "success"));
        assert_eq!(
            en(&card),
            "**:GeneralBusinessTrip: PROJ: ** [api](https://git.example.com/team/api)\n \
             ---\nfix: handle empty input"
        );
        assert_eq!(
            zh(&card),
            "**:GeneralBusinessTrip: 项目：** [api](https://git.example.com/team/api)\n \
             ---\nfix: handle empty input"
        );
    }

    #[test]
    fn test_failed_steps_line_first() {
        let mut event = make_event(EventKind::Build, "failure");
        event.build.failed_steps = "test,lint".to_string();

        let card = compose(&event);
        assert!(en(&card).starts_with("**:SLAP: FAIL: ** <font color='red'>test,lint</font>\n"));
        assert!(zh(&card).starts_with("**:SLAP: 失败：** <font color='red'>test,lint</font>\n"));
    }

    #[test]
    fn test_tag_takes_precedence_over_branch() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.tag = "v1.2.0".to_string();
        event.commit.branch = "main".to_string();

        let card = compose(&event);
        assert!(en(&card).contains("**:Pin: TAGS: ** <text_tag color='indigo'>v1.2.0</text_tag>\n"));
        assert!(!en(&card).contains(":StatusReading:"));
        assert!(zh(&card).contains("**:Pin: 标签：** "));
        assert!(!zh(&card).contains("分支"));
    }

    #[test]
    fn test_branch_line() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.branch = "main".to_string();

        let card = compose(&event);
        assert!(
            en(&card)
                .contains("**:StatusReading: BCHS: ** <text_tag color='blue'>main</text_tag>\n")
        );
        assert!(!en(&card).contains(":Pin:"));
    }

    #[test]
    fn test_author_line() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.author = "alice".to_string();
        event.commit.author_name = "Alice W".to_string();

        let card = compose(&event);
        assert!(en(&card).contains("**:EMBARRASSED: CMMT: ** Alice W@alice\n"));

        event.commit.author_email = "alice@example.com".to_string();
        let card = compose(&event);
        assert!(
            en(&card).contains("**:EMBARRASSED: CMMT: ** [Alice W@alice](mailto:alice@example.com)\n")
        );
        assert!(
            zh(&card).contains("**:EMBARRASSED: 提交：** [Alice W@alice](mailto:alice@example.com)\n")
        );
    }

    #[test]
    fn test_no_author_line_without_author() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.author_email = "alice@example.com".to_string();

        let card = compose(&event);
        assert!(!en(&card).contains(":EMBARRASSED:"));
    }

    #[test]
    fn test_commit_line() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.sha = SHA.to_string();
        event.commit.link = "https://git.example.com/team/api/commit/abcdef01".to_string();

        let card = compose(&event);
        assert!(en(&card).contains(
            "**:Status_PrivateMessage: NOTE: ** [#abcdef01](https://git.example.com/team/api/commit/abcdef01)\n"
        ));
        // BUILD cards never carry the image line
        assert!(!en(&card).contains(":CheckMark:"));
    }

    #[test]
    fn test_deploy_image_line() {
        let mut event = make_event(EventKind::Deploy, "success");
        event.commit.sha = SHA.to_string();

        let card = compose(&event);
        assert!(en(&card).contains("[#abcdef01]("));
        assert!(en(&card).contains(
            "**:CheckMark: IMAGE：** ** registry.example.com/team/api:abcdef0**\n"
        ));
        assert!(zh(&card).contains(
            "**:CheckMark: 镜像：** ** registry.example.com/team/api:abcdef0**\n"
        ));
    }

    #[test]
    fn test_deploy_without_sha_has_no_image_line() {
        let card = compose(&make_event(EventKind::Deploy, "success"));
        assert!(!en(&card).contains(":CheckMark:"));
        assert!(!en(&card).contains(":Status_PrivateMessage:"));
    }

    #[test]
    fn test_short_sha_is_not_padded() {
        let mut event = make_event(EventKind::Deploy, "success");
        event.commit.sha = "abc12".to_string();

        let card = compose(&event);
        assert!(en(&card).contains("[#abc12]("));
        assert!(en(&card).contains("/api:abc12**"));
    }

    #[test]
    fn test_line_order() {
        let mut event = make_event(EventKind::Deploy, "failure");
        event.build.failed_steps = "deploy".to_string();
        event.commit.branch = "main".to_string();
        event.commit.author = "alice".to_string();
        event.commit.sha = SHA.to_string();

        let card = compose(&event);
        let body = en(&card);
        let positions: Vec<usize> = [
            ":SLAP:",
            ":GeneralBusinessTrip:",
            ":StatusReading:",
            ":EMBARRASSED:",
            ":Status_PrivateMessage:",
            ":CheckMark:",
            " ---\n",
        ]
        .iter()
        .map(|marker| body.find(marker).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_commit_message_verbatim() {
        let mut event = make_event(EventKind::Build, "success");
        event.commit.message = "feat: **bold** <b>\n\nbody [link](x)".to_string();

        let card = compose(&event);
        assert!(en(&card).ends_with(" ---\nfeat: **bold** <b>\n\nbody [link](x)"));
    }

    #[test]
    fn test_note_block() {
        let card = compose(&make_event(EventKind::Build, "success"));

        for (locale, text) in [
            (Locale::EnUs, "This msg is sent by drone lark robot"),
            (Locale::ZhCn, "以上信息由 drone 飞书机器人自动发出"),
        ] {
            let elements = card.elements(locale);
            assert_eq!(elements.len(), 2);
            assert!(matches!(elements[0], Element::Markdown { .. }));
            let Element::Note { elements: notes } = &elements[1] else {
                panic!("expected note block");
            };
            assert_eq!(
                notes[0].content(),
                Some(
                    format!(
                        ":Loudspeaker: [{}](https://drone.example.com/team/api/42)",
                        text
                    )
                    .as_str()
                )
            );
        }
    }

    #[test]
    fn test_both_locales_present() {
        let card = compose(&make_event(EventKind::Build, "success"));
        let locales: Vec<Locale> = card.i18n_elements.keys().copied().collect();
        assert_eq!(locales, vec![Locale::ZhCn, Locale::EnUs]);
    }
}
