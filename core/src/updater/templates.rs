//! Literal text blocks written into the playbooks.
//!
//! The `{{ ... }}` expressions are resolved by the orchestration platform
//! at job time; this tool treats them as opaque text.

/// First comment of the injected block, also the guard against inserting
/// it twice.
pub const METADATA_MARKER: &str = "# AAP Job Information";

/// Substituted with the category default reason before insertion.
pub const REASON_TOKEN: &str = "PLACEHOLDER_REASON";

/// Variables block placed after the version declaration.
pub const AAP_VARIABLES: &str = r#"
    # AAP Job Information (automatically injected by AAP)
    aap_job_template: "{{ tower_job_template_name | default('N/A') }}"
    aap_job_id: "{{ tower_job_id | default('N/A') }}"
    aap_user: "{{ tower_user_name | default('N/A') }}"
    aap_inventory: "{{ tower_inventory_name | default('N/A') }}"

    # Change tracking for AAP
    change_reason: "{{ change_reason | default('PLACEHOLDER_REASON') }}"
    change_ticket: "{{ change_ticket | default('') }}"

    # Credential status for display
    credential_status: "{{ 'AAP Injected' if ansible_user is defined and ansible_user != '' else 'Manual Configuration' }}"
"#;

/// Completion summary appended to playbooks that have no post_tasks yet.
pub const POST_TASKS: &str = r#"

  post_tasks:
    - name: Display playbook completion summary
      ansible.builtin.debug:
        msg: |
          =====================================
          {{ playbook_name }} - COMPLETED
          =====================================
          Execution Summary:
          - Job ID: {{ aap_job_id }}
          - Completed: {{ ansible_date_time.iso8601 }}
          - Status: Success
          - Processed Hosts: {{ ansible_play_hosts | length }}

          Change Tracking:
          - Ticket: {{ change_ticket | default('No ticket provided') }}
          - Reason: {{ change_reason }}

          Next Steps:
          - Review AAP job logs for detailed results
          - Verify changes on target systems if applicable
          - Update change management system if required
          =====================================
      tags: always
      run_once: true
"#;
